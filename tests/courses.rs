mod common;
use axum::http::StatusCode;
use coursehub::model::Store;
use serde_json::{Value, json};

use crate::common::{Action, Flow, setup_server, setup_server_with};

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|c| c["title"].as_str().expect("title").to_string())
        .collect()
}

fn course_body() -> Value {
    json!({
        "title": "Rust in Practice",
        "description": "Ownership without tears",
        "instructor": "Ferris",
        "category": "Programming",
        "level": "advanced",
        "duration": "6 weeks",
        "price": 120,
        "imageUrl": "https://example.com/rust.png",
    })
}

#[tokio::test]
async fn route_courses_list_test() {
    let server = setup_server();

    Flow::new()
        .step(
            Action::new("list", "GET", "/api/courses").assert_body(|body| {
                let titles = titles(body);
                assert_eq!(titles.len(), 5);
                assert_eq!(titles[0], "JavaScript Fundamentals");
                assert_eq!(titles[4], "Advanced CSS & Design");
            }),
        )
        .step(
            Action::new("by_category", "GET", "/api/courses")
                .with_param("category", "Frontend")
                .assert_body(|body| assert_eq!(titles(body), vec!["React Development"])),
        )
        .step(
            Action::new("category_is_case_sensitive", "GET", "/api/courses")
                .with_param("category", "frontend")
                .assert_body(|body| assert!(titles(body).is_empty())),
        )
        .step(
            Action::new("empty_category_means_all", "GET", "/api/courses")
                .with_param("category", "")
                .assert_body(|body| assert_eq!(titles(body).len(), 5)),
        )
        .run(&server)
        .await;
}

#[tokio::test]
async fn route_courses_get_test() {
    let server = setup_server();

    Flow::new()
        .step(
            Action::new("get", "GET", "/api/courses/2").assert_body(|body| {
                assert_eq!(body["id"], 2);
                assert_eq!(body["level"], "intermediate");
                assert!(body["imageUrl"].is_string());
                assert!(body["createdAt"].is_string());
            }),
        )
        .step(
            Action::new("missing", "GET", "/api/courses/99999")
                .with_expect(StatusCode::NOT_FOUND)
                .assert_body(|body| {
                    assert_eq!(body["message"], "Course not found.");
                    assert_eq!(body["status_code"], "404");
                }),
        )
        .step(
            Action::new("not_a_number", "GET", "/api/courses/abc")
                .with_expect(StatusCode::BAD_REQUEST)
                .assert_body(|body| {
                    assert_eq!(body["message"], "Validation error, path parameter is invalid.");
                    assert!(body.get("errors").is_none());
                }),
        )
        .run(&server)
        .await;
}

#[tokio::test]
async fn route_courses_create_test() {
    let server = setup_server();

    Flow::new()
        .step(
            Action::new("create", "POST", "/api/courses")
                .with_body(course_body())
                .assert_body(|body| {
                    assert_eq!(body["id"], 6);
                    assert_eq!(body["title"], "Rust in Practice");
                    assert_eq!(body["price"], 120);
                }),
        )
        .step(
            Action::new("created_is_listed", "GET", "/api/courses/6")
                .assert_body(|body| assert_eq!(body["instructor"], "Ferris")),
        )
        .step(
            Action::new("missing_title", "POST", "/api/courses")
                .with_body({
                    let mut body = course_body();
                    body.as_object_mut().expect("object").remove("title");
                    body
                })
                .with_expect(StatusCode::BAD_REQUEST)
                .assert_body(|body| {
                    let errors = body["errors"].as_array().expect("errors list");
                    assert_eq!(errors.len(), 1);
                    assert_eq!(errors[0]["path"], json!(["title"]));
                    assert_eq!(errors[0]["code"], "invalid_type");
                }),
        )
        .step(
            Action::new("bad_level_and_price", "POST", "/api/courses")
                .with_body({
                    let mut body = course_body();
                    body["level"] = json!("expert");
                    body["price"] = json!("free");
                    body
                })
                .with_expect(StatusCode::BAD_REQUEST)
                .assert_body(|body| {
                    let errors = body["errors"].as_array().expect("errors list");
                    assert_eq!(errors.len(), 2);
                    assert_eq!(errors[0]["code"], "invalid_enum_value");
                    assert_eq!(errors[1]["code"], "invalid_type");
                }),
        )
        .step(
            Action::new("malformed_json", "POST", "/api/courses")
                .with_raw_body("{\"title\": ")
                .with_expect(StatusCode::BAD_REQUEST)
                .assert_body(|body| assert_eq!(body["errors"][0]["code"], "invalid_json")),
        )
        .run(&server)
        .await;
}

#[tokio::test]
async fn route_courses_unseeded_test() {
    let server = setup_server_with(Store::new());

    Flow::new()
        .step(
            Action::new("empty_catalog", "GET", "/api/courses")
                .assert_body(|body| assert_eq!(body, &json!([]))),
        )
        .step(
            Action::new("first_id", "POST", "/api/courses")
                .with_body(course_body())
                .assert_body(|body| assert_eq!(body["id"], 1)),
        )
        .run(&server)
        .await;
}
