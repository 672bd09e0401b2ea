use axum::{
    Json, Router,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    Config,
    validation::{Schema, Violation},
    web::{AppState, WebError, WebResult, doc::ApiDoc, panic_response},
};

pub mod courses;
pub mod lessons;
pub mod progress;
pub mod users;

pub fn build_app(state: AppState, config: &Config) -> Router {
    let api = Router::new()
        .merge(users::routes(state.clone()))
        .merge(courses::routes(state.clone()))
        .merge(lessons::routes(state.clone()))
        .merge(progress::routes(state));

    let mut router = Router::new().nest("/api", api);

    if config.app().docs() {
        let openapi = ApiDoc::openapi();

        router = router.merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", openapi));
    }

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

/// Runs a JSON body through `schema` and deserializes the normalized result.
/// Malformed JSON is reported as a single violation, like any other bad body.
pub(crate) fn validated<T: DeserializeOwned>(
    schema: &Schema,
    body: Result<Json<Value>, JsonRejection>,
) -> WebResult<T> {
    let Json(body) = body.map_err(|rejection| {
        WebError::validation_failed(
            schema.name(),
            vec![Violation::invalid_json(rejection.body_text())],
        )
    })?;

    let normalized = schema
        .validate(&body)
        .map_err(|violations| WebError::validation_failed(schema.name(), violations))?;

    serde_json::from_value(normalized).map_err(WebError::server_serde_error)
}

/// Unwraps path parameters, turning a malformed id into the regular error body.
pub(crate) fn path_params<T>(params: Result<Path<T>, PathRejection>) -> WebResult<T> {
    let Path(params) =
        params.map_err(|rejection| WebError::path_rejected(rejection.body_text()))?;
    Ok(params)
}
