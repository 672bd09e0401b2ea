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
        entity::{User, UserCreate},
    },
    web::{
        AppState, ErrorResponse, WebError, WebResult, dto::users::USER_CREATE_SCHEMA,
        routes::{path_params, validated},
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/users", post(users_create_handler))
        .route("/users/{user_id}", get(users_get_handler))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserCreate,
    description = "Creates a new user. Emails are not required to be unique. The password is stored as given and never returned",
    responses(
        (status = 200, description = "User created successfully", body = User),
        (status = 400, description = "Request body is invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "users"
)]
#[tracing::instrument(skip_all)]
async fn users_create_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<impl IntoResponse> {
    let payload: UserCreate = validated(&USER_CREATE_SCHEMA, body)?;
    let created = User::create(state.mm(), payload)
        .await
        .map_err(|e| WebError::resource_store_error(User::get_resource_type(), e))?;

    tracing::info!(user_id = created.id(), "user registered");
    Ok((StatusCode::OK, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    description = "Fetch a single user",
    params(
        ("user_id" = i64, Path, description = "ID of the user to get")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Path parameter is invalid", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "users"
)]
#[tracing::instrument(skip(state))]
async fn users_get_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> WebResult<impl IntoResponse> {
    let user_id = path_params(path)?;
    let user = User::find_by_id(state.mm(), user_id)
        .await
        .ok_or_else(|| WebError::resource_not_found(User::get_resource_type()))?;

    Ok((StatusCode::OK, Json(user)))
}
