use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;

use crate::{
    model::{
        CrudRepository, ResourceTyped,
        entity::{Lesson, LessonCreate},
    },
    web::{
        AppState, ErrorResponse, WebError, WebResult, dto::lessons::LESSON_CREATE_SCHEMA,
        routes::{path_params, validated},
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/courses/{course_id}/lessons", get(lessons_by_course_handler))
        .route("/lessons", post(lessons_create_handler))
        .route("/lessons/{lesson_id}", get(lessons_get_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/lessons",
    description = "Lessons of a course in presentation order. Unknown courses yield an empty list",
    params(
        ("course_id" = i64, Path, description = "ID of the course")
    ),
    responses(
        (status = 200, description = "Lessons sorted by order", body = Vec<Lesson>),
        (status = 400, description = "Path parameter is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
#[tracing::instrument(skip(state))]
async fn lessons_by_course_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> WebResult<impl IntoResponse> {
    let course_id = path_params(path)?;
    let lessons = Lesson::by_course(state.mm(), course_id).await;
    Ok((StatusCode::OK, Json(lessons)))
}

#[utoipa::path(
    get,
    path = "/api/lessons/{lesson_id}",
    description = "Fetch a single lesson",
    params(
        ("lesson_id" = i64, Path, description = "ID of the lesson to get")
    ),
    responses(
        (status = 200, description = "Lesson found", body = Lesson),
        (status = 400, description = "Path parameter is invalid", body = ErrorResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
#[tracing::instrument(skip(state))]
async fn lessons_get_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> WebResult<impl IntoResponse> {
    let lesson_id = path_params(path)?;
    let lesson = Lesson::find_by_id(state.mm(), lesson_id)
        .await
        .ok_or_else(|| WebError::resource_not_found(Lesson::get_resource_type()))?;

    Ok((StatusCode::OK, Json(lesson)))
}

#[utoipa::path(
    post,
    path = "/api/lessons",
    request_body = LessonCreate,
    description = "Adds a lesson. The course id is stored as given",
    responses(
        (status = 200, description = "Lesson created", body = Lesson),
        (status = 400, description = "Request body is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
#[tracing::instrument(skip_all)]
async fn lessons_create_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let payload: LessonCreate = validated(&LESSON_CREATE_SCHEMA, body)?;

    let created = Lesson::create(state.mm(), payload)
        .await
        .map_err(|e| WebError::resource_store_error(Lesson::get_resource_type(), e))?;

    tracing::info!(lesson_id = created.id(), course_id = created.course_id(), "lesson created");
    Ok((StatusCode::OK, Json(created)))
}
