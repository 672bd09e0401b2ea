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
        ResourceTyped,
        entity::{Course, UserCourseProgress, UserLessonProgress},
    },
    web::{
        AppState, ErrorResponse, WebError, WebResult,
        dto::progress::{
            COURSE_PROGRESS_UPDATE_SCHEMA, CourseProgressUpdate, LESSON_PROGRESS_UPDATE_SCHEMA,
            LessonProgressUpdate,
        },
        routes::{path_params, validated},
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/users/{user_id}/courses", get(enrolled_courses_handler))
        .route(
            "/users/{user_id}/courses/{course_id}/enroll",
            post(course_enroll_handler),
        )
        .route(
            "/users/{user_id}/courses/{course_id}/progress",
            get(course_progress_get_handler).put(course_progress_update_handler),
        )
        .route(
            "/users/{user_id}/lessons/{lesson_id}/complete",
            post(lesson_complete_handler),
        )
        .route(
            "/users/{user_id}/lessons/{lesson_id}/progress",
            get(lesson_progress_get_handler).put(lesson_progress_update_handler),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/courses/{course_id}/enroll",
    description = "Enrolls the user. Repeating the call returns the existing record unchanged",
    params(
        ("user_id" = i64, Path, description = "ID of the user"),
        ("course_id" = i64, Path, description = "ID of the course")
    ),
    responses(
        (status = 200, description = "Enrollment record", body = UserCourseProgress),
        (status = 400, description = "Path parameter is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
#[tracing::instrument(skip(state))]
async fn course_enroll_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> WebResult<impl IntoResponse> {
    let (user_id, course_id) = path_params(path)?;
    let progress = UserCourseProgress::enroll(state.mm(), user_id, course_id)
        .await
        .map_err(|e| WebError::resource_store_error(UserCourseProgress::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(progress)))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/courses",
    description = "Courses the user is enrolled in, in catalog order",
    params(
        ("user_id" = i64, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Enrolled courses", body = Vec<Course>),
        (status = 400, description = "Path parameter is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
#[tracing::instrument(skip(state))]
async fn enrolled_courses_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> WebResult<impl IntoResponse> {
    let user_id = path_params(path)?;
    let courses = Course::enrolled_by(state.mm(), user_id).await;
    Ok((StatusCode::OK, Json(courses)))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/courses/{course_id}/progress",
    description = "Progress record of the pair, or null when there is none",
    params(
        ("user_id" = i64, Path, description = "ID of the user"),
        ("course_id" = i64, Path, description = "ID of the course")
    ),
    responses(
        (status = 200, description = "Progress record or null", body = UserCourseProgress),
        (status = 400, description = "Path parameter is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
#[tracing::instrument(skip(state))]
async fn course_progress_get_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> WebResult<impl IntoResponse> {
    let (user_id, course_id) = path_params(path)?;
    let progress = UserCourseProgress::find(state.mm(), user_id, course_id).await;
    Ok((StatusCode::OK, Json(progress)))
}

#[utoipa::path(
    put,
    path = "/api/users/{user_id}/courses/{course_id}/progress",
    description = "Sets course progress, enrolling the user first if needed",
    request_body = CourseProgressUpdate,
    params(
        ("user_id" = i64, Path, description = "ID of the user"),
        ("course_id" = i64, Path, description = "ID of the course")
    ),
    responses(
        (status = 200, description = "Updated progress record", body = UserCourseProgress),
        (status = 400, description = "Request body or path parameter is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
#[tracing::instrument(skip(state, body))]
async fn course_progress_update_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let (user_id, course_id) = path_params(path)?;
    let payload: CourseProgressUpdate = validated(&COURSE_PROGRESS_UPDATE_SCHEMA, body)?;

    let progress =
        UserCourseProgress::update_progress(state.mm(), user_id, course_id, payload.progress)
            .await
            .map_err(|e| {
                WebError::resource_store_error(UserCourseProgress::get_resource_type(), e)
            })?;

    Ok((StatusCode::OK, Json(progress)))
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/lessons/{lesson_id}/complete",
    description = "Marks the lesson as watched by the user",
    params(
        ("user_id" = i64, Path, description = "ID of the user"),
        ("lesson_id" = i64, Path, description = "ID of the lesson")
    ),
    responses(
        (status = 200, description = "Lesson progress record", body = UserLessonProgress),
        (status = 400, description = "Path parameter is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
#[tracing::instrument(skip(state))]
async fn lesson_complete_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> WebResult<impl IntoResponse> {
    let (user_id, lesson_id) = path_params(path)?;
    set_lesson_completed(&state, user_id, lesson_id, true).await
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/lessons/{lesson_id}/progress",
    description = "Lesson progress record of the pair, or null when there is none",
    params(
        ("user_id" = i64, Path, description = "ID of the user"),
        ("lesson_id" = i64, Path, description = "ID of the lesson")
    ),
    responses(
        (status = 200, description = "Lesson progress record or null", body = UserLessonProgress),
        (status = 400, description = "Path parameter is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
#[tracing::instrument(skip(state))]
async fn lesson_progress_get_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> WebResult<impl IntoResponse> {
    let (user_id, lesson_id) = path_params(path)?;
    let progress = UserLessonProgress::find(state.mm(), user_id, lesson_id).await;
    Ok((StatusCode::OK, Json(progress)))
}

#[utoipa::path(
    put,
    path = "/api/users/{user_id}/lessons/{lesson_id}/progress",
    description = "Marks the lesson as watched or not watched",
    request_body = LessonProgressUpdate,
    params(
        ("user_id" = i64, Path, description = "ID of the user"),
        ("lesson_id" = i64, Path, description = "ID of the lesson")
    ),
    responses(
        (status = 200, description = "Lesson progress record", body = UserLessonProgress),
        (status = 400, description = "Request body or path parameter is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "progress"
)]
#[tracing::instrument(skip(state, body))]
async fn lesson_progress_update_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let (user_id, lesson_id) = path_params(path)?;
    let payload: LessonProgressUpdate = validated(&LESSON_PROGRESS_UPDATE_SCHEMA, body)?;
    set_lesson_completed(&state, user_id, lesson_id, payload.completed).await
}

async fn set_lesson_completed(
    state: &AppState,
    user_id: i64,
    lesson_id: i64,
    completed: bool,
) -> WebResult<(StatusCode, Json<UserLessonProgress>)> {
    let progress = UserLessonProgress::update_completed(state.mm(), user_id, lesson_id, completed)
        .await
        .map_err(|e| WebError::resource_store_error(UserLessonProgress::get_resource_type(), e))?;

    Ok((StatusCode::OK, Json(progress)))
}
