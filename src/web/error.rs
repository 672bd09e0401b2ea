use std::any::Any;

use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::{
    error::log_error,
    model::{ResourceType, StoreError},
    validation::Violation,
};

pub type WebResult<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("ResourceNotFound: {resource_type:?}")]
    ResourceNotFound { resource_type: ResourceType },

    #[error("ResourceStoreError: {resource_type:?}. Error: {error}")]
    ResourceStoreError {
        resource_type: ResourceType,
        error: StoreError,
    },
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("ValidationFailed: {schema}, {} violation(s)", violations.len())]
    ValidationFailed {
        schema: &'static str,
        violations: Vec<Violation>,
    },

    #[error("ValidationPathRejected: {message}")]
    ValidationPathRejected { message: String },
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("ServerSerdeError: {0}")]
    ServerSerdeError(#[from] serde_json::Error),
    #[error("ServerPanic: {0}")]
    ServerPanic(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn client_display(&self) -> String {
        String::from("Internal server error.")
    }
}

impl ResourceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            Self::ResourceStoreError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceNotFound { resource_type } => format!("{resource_type} not found."),
            Self::ResourceStoreError { .. } => {
                String::from("Resource error, unable to store resource.")
            }
        }
    }
}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ValidationFailed { .. } => {
                String::from("Validation error, request body is invalid.")
            }
            Self::ValidationPathRejected { .. } => {
                String::from("Validation error, path parameter is invalid.")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("ResourceError - {0}")]
    ResourceError(#[from] ResourceError),
    #[error("ValidationError - {0}")]
    ValidationError(#[from] ValidationError),
    #[error("ServerError - {0}")]
    ServerError(#[from] ServerError),
}

impl WebError {
    pub fn resource_not_found(r#type: ResourceType) -> Self {
        Self::ResourceError(ResourceError::ResourceNotFound {
            resource_type: r#type,
        })
    }

    pub fn resource_store_error(r#type: ResourceType, error: StoreError) -> Self {
        Self::ResourceError(ResourceError::ResourceStoreError {
            resource_type: r#type,
            error,
        })
    }

    pub fn validation_failed(schema: &'static str, violations: Vec<Violation>) -> Self {
        Self::ValidationError(ValidationError::ValidationFailed { schema, violations })
    }

    pub fn path_rejected<S: Into<String>>(message: S) -> Self {
        Self::ValidationError(ValidationError::ValidationPathRejected {
            message: message.into(),
        })
    }

    pub fn server_serde_error(e: serde_json::Error) -> Self {
        Self::ServerError(ServerError::ServerSerdeError(e))
    }

    pub fn server_panic<S: Into<String>>(message: S) -> Self {
        Self::ServerError(ServerError::ServerPanic(message.into()))
    }

    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::ResourceError(e) => e.status_code(),
            Self::ValidationError(e) => e.status_code(),
            Self::ServerError(e) => e.status_code(),
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceError(e) => e.client_display(),
            Self::ValidationError(e) => e.client_display(),
            Self::ServerError(e) => e.client_display(),
        }
    }

    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Self::ValidationError(ValidationError::ValidationFailed { violations, .. }) => {
                Some(violations)
            }
            _ => None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message for the client
    pub message: String,
    /// HTTP status code (stringified)
    pub status_code: String,
    /// Optional debug details (only in debug mode)
    pub details: Option<String>,
    /// Itemized violations, present on validation failures only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Violation>>,
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            log_error(&self);
        } else {
            tracing::debug!(status = %status_code, "{}", self);
        }

        let body = ErrorResponse {
            message: self.client_display(),
            status_code: status_code.as_str().to_string(),
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
            errors: self.violations().map(<[Violation]>::to_vec),
        };

        (status_code, Json(body)).into_response()
    }
}

/// Turns a handler panic into the regular 500 error body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::from("unknown panic payload")
    };

    WebError::server_panic(message).into_response()
}
