use std::collections::HashMap;

use axum::http::StatusCode;
use axum_test::TestServer;
use coursehub::{
    Config, build_server_with_store,
    model::{ModelManager, Store},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Server over a freshly seeded store, so every test starts from the same catalog.
pub fn setup_server() -> TestServer {
    let store = Store::seeded().expect("seed catalog");
    setup_server_with(store)
}

pub fn setup_server_with(store: Store) -> TestServer {
    let config = Config::default();
    let app = build_server_with_store(ModelManager::new(store), &config)
        .expect("build server")
        .1;
    TestServer::new(app).expect("start test server")
}

#[derive(Debug)]
pub struct FlowContext {
    pub store: HashMap<&'static str, Value>, // a way to pass data between steps
}

impl FlowContext {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn store(&mut self, key: &'static str, val: Value) {
        self.store.insert(key, val);
    }

    pub fn get(&self, key: &str) -> &Value {
        self.store.get(key).expect("missing store key")
    }

    #[allow(unused)]
    pub fn get_json<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned,
    {
        let obj = self.get(key);
        serde_json::from_value(obj.clone()).expect("Invalid json format")
    }

    /// Numeric `id` of a saved response body.
    #[allow(unused)]
    pub fn id_of(&self, key: &str) -> i64 {
        self.get(key)["id"].as_i64().expect("saved body has no numeric id")
    }
}

pub struct Action {
    pub name: &'static str,
    pub method: &'static str,
    pub path: String,
    pub dyn_path: Option<Box<dyn Fn(&FlowContext) -> String + Send + Sync>>,
    pub body: Option<Value>,
    pub raw_body: Option<&'static str>,
    pub dyn_body: Option<Box<dyn Fn(&FlowContext) -> Value + Send + Sync>>,
    pub expect: StatusCode,
    pub query_params: Vec<(String, String)>,
    pub body_asserts: Vec<Box<dyn Fn(&Value) + Send + Sync>>,
    pub save_as: Option<&'static str>,
}

impl Action {
    pub fn new(name: &'static str, method: &'static str, path: &str) -> Self {
        Self {
            name,
            method,
            path: path.to_string(),
            dyn_path: None,
            body: None,
            raw_body: None,
            dyn_body: None,
            expect: StatusCode::OK,
            query_params: vec![],
            body_asserts: vec![],
            save_as: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sends `text` verbatim with a JSON content type.
    #[allow(unused)]
    pub fn with_raw_body(mut self, text: &'static str) -> Self {
        self.raw_body = Some(text);
        self
    }

    pub fn with_expect(mut self, expect: StatusCode) -> Self {
        self.expect = expect;
        self
    }

    #[allow(unused)]
    pub fn with_param(mut self, key: &str, val: &str) -> Self {
        self.query_params
            .push((String::from(key), String::from(val)));
        self
    }

    #[allow(unused)]
    pub fn with_dyn_path<F>(mut self, f: F) -> Self
    where
        F: Fn(&FlowContext) -> String + Send + Sync + 'static,
    {
        self.dyn_path = Some(Box::new(f));
        self
    }

    #[allow(unused)]
    pub fn with_dyn_body<F>(mut self, f: F) -> Self
    where
        F: Fn(&FlowContext) -> Value + Send + Sync + 'static,
    {
        self.dyn_body = Some(Box::new(f));
        self
    }

    #[allow(unused)]
    pub fn with_save_as(mut self, key: &'static str) -> Self {
        self.save_as = Some(key);
        self
    }

    pub fn assert_body<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.body_asserts.push(Box::new(check));
        self
    }
}

pub struct Flow {
    actions: Vec<Action>,
}

impl Flow {
    pub fn new() -> Self {
        Self { actions: vec![] }
    }

    pub fn step(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub async fn run(self, server: &TestServer) {
        let mut ctx = FlowContext::new(); // create new context for this flow
        for action in self.actions {
            println!("==> Running test action `{}`", action.name);

            let path = if let Some(dyn_path_fn) = action.dyn_path {
                dyn_path_fn(&ctx)
            } else {
                action.path.clone()
            };

            let mut req = match action.method {
                "GET" => server.get(&path),
                "POST" => server.post(&path),
                "PUT" => server.put(&path),
                "DELETE" => server.delete(&path),
                _ => panic!("unsupported method {}", action.method),
            };

            match (action.dyn_body, action.body, action.raw_body) {
                (Some(f), _, _) => req = req.json(&f(&ctx)),
                (_, Some(json), _) => req = req.json(&json),
                (_, _, Some(text)) => {
                    req = req.text(text).content_type("application/json");
                }
                _ => {}
            }

            for (k, v) in action.query_params {
                req = req.add_query_param(&k, v);
            }

            let resp = req.await;
            resp.assert_status(action.expect);

            if !action.body_asserts.is_empty() {
                let body = resp.json::<Value>();
                for check in action.body_asserts {
                    check(&body);
                }
            }

            if let Some(save_key) = action.save_as {
                ctx.store(save_key, resp.json::<Value>());
            }
        }
    }
}

// Common actions builders

#[allow(unused)]
pub fn create_user_action(email: &str) -> Action {
    Action::new("create_user", "POST", "/api/users").with_body(json!({
        "email": email,
        "password": "secret",
        "firstName": "Ada",
        "lastName": "Lovelace",
    }))
}

#[allow(unused)]
pub fn enroll_action(user_id: i64, course_id: i64) -> Action {
    Action::new(
        "enroll",
        "POST",
        &format!("/api/users/{user_id}/courses/{course_id}/enroll"),
    )
}
