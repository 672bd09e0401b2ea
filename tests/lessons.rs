mod common;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::common::{Action, Flow, setup_server};

fn lesson_body(course_id: i64, order: i64) -> Value {
    json!({
        "courseId": course_id,
        "title": format!("Lesson {order}"),
        "description": "More of the same",
        "videoUrl": "https://example.com/video.mp4",
        "duration": "10 min",
        "order": order,
    })
}

fn orders(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|l| l["order"].as_i64().expect("order"))
        .collect()
}

#[tokio::test]
async fn route_lessons_by_course_test() {
    let server = setup_server();

    Flow::new()
        .step(
            Action::new("seeded", "GET", "/api/courses/1/lessons").assert_body(|body| {
                assert_eq!(orders(body), vec![1, 2, 3]);
                assert_eq!(body[0]["title"], "Introduction to JavaScript");
                assert_eq!(body[0]["courseId"], 1);
            }),
        )
        .step(
            Action::new("unknown_course", "GET", "/api/courses/77/lessons")
                .assert_body(|body| assert_eq!(body, &json!([]))),
        )
        // inserted out of order, listed by order
        .step(Action::new("add_first", "POST", "/api/lessons").with_body(lesson_body(3, 2)))
        .step(Action::new("add_second", "POST", "/api/lessons").with_body(lesson_body(3, 1)))
        .step(
            Action::new("sorted", "GET", "/api/courses/3/lessons").assert_body(|body| {
                assert_eq!(orders(body), vec![1, 2]);
                assert_eq!(body[0]["id"], 7);
                assert_eq!(body[1]["id"], 6);
            }),
        )
        .run(&server)
        .await;
}

#[tokio::test]
async fn route_lessons_create_and_get_test() {
    let server = setup_server();

    Flow::new()
        .step(
            Action::new("create", "POST", "/api/lessons")
                .with_body(lesson_body(2, 3))
                .assert_body(|body| {
                    assert_eq!(body["id"], 6);
                    assert_eq!(body["videoUrl"], "https://example.com/video.mp4");
                }),
        )
        .step(
            Action::new("get", "GET", "/api/lessons/6")
                .assert_body(|body| assert_eq!(body["title"], "Lesson 3")),
        )
        // the course id is not checked against the catalog
        .step(
            Action::new("unknown_course", "POST", "/api/lessons")
                .with_body(lesson_body(999, 1))
                .assert_body(|body| {
                    assert_eq!(body["id"], 7);
                    assert_eq!(body["courseId"], 999);
                }),
        )
        .step(
            Action::new("listed_under_unknown_course", "GET", "/api/courses/999/lessons")
                .assert_body(|body| assert_eq!(orders(body), vec![1])),
        )
        .step(
            Action::new("float_order", "POST", "/api/lessons")
                .with_body({
                    let mut body = lesson_body(1, 1);
                    body["order"] = json!(1.5);
                    body
                })
                .with_expect(StatusCode::BAD_REQUEST)
                .assert_body(|body| {
                    assert_eq!(body["errors"][0]["path"], json!(["order"]));
                    assert_eq!(body["errors"][0]["received"], "float");
                }),
        )
        .step(
            Action::new("not_a_number", "GET", "/api/lessons/1.5")
                .with_expect(StatusCode::BAD_REQUEST)
                .assert_body(|body| {
                    assert_eq!(body["message"], "Validation error, path parameter is invalid.")
                }),
        )
        .step(
            Action::new("missing", "GET", "/api/lessons/1000")
                .with_expect(StatusCode::NOT_FOUND)
                .assert_body(|body| assert_eq!(body["message"], "Lesson not found.")),
        )
        .run(&server)
        .await;
}
