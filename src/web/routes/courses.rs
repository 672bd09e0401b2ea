use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::Value;

use crate::{
    model::{
        CrudRepository, ResourceTyped,
        entity::{Course, CourseCreate},
    },
    web::{
        AppState, ErrorResponse, WebError, WebResult,
        dto::courses::{COURSE_CREATE_SCHEMA, CoursesQuery},
        routes::{path_params, validated},
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route(
            "/courses",
            get(courses_list_handler).post(courses_create_handler),
        )
        .route("/courses/{course_id}", get(courses_get_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/courses",
    description = "List the catalog, optionally restricted to one category",
    params(CoursesQuery),
    responses(
        (status = 200, description = "Courses in catalog order", body = Vec<Course>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
#[tracing::instrument(skip(state))]
async fn courses_list_handler(
    State(state): State<AppState>,
    Query(query): Query<CoursesQuery>,
) -> WebResult<impl IntoResponse> {
    let courses = match query.category() {
        Some(category) => Course::by_category(state.mm(), category).await,
        None => Course::list(state.mm()).await,
    };

    Ok((StatusCode::OK, Json(courses)))
}

#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    description = "Fetch a single course",
    params(
        ("course_id" = i64, Path, description = "ID of the course to get")
    ),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 400, description = "Path parameter is invalid", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
#[tracing::instrument(skip(state))]
async fn courses_get_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> WebResult<impl IntoResponse> {
    let course_id = path_params(path)?;
    let course = Course::find_by_id(state.mm(), course_id)
        .await
        .ok_or_else(|| WebError::resource_not_found(Course::get_resource_type()))?;

    Ok((StatusCode::OK, Json(course)))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CourseCreate,
    description = "Adds a course to the catalog",
    responses(
        (status = 200, description = "Course created", body = Course),
        (status = 400, description = "Request body is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
#[tracing::instrument(skip_all)]
async fn courses_create_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let payload: CourseCreate = validated(&COURSE_CREATE_SCHEMA, body)?;

    let created = Course::create(state.mm(), payload)
        .await
        .map_err(|e| WebError::resource_store_error(Course::get_resource_type(), e))?;

    tracing::info!(course_id = created.id(), "course created");
    Ok((StatusCode::OK, Json(created)))
}
