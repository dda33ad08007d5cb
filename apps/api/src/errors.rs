use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::catalog::RoleNotFound;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only client mistakes surface here. Provider failures are folded into the
/// `/chat` answer text by the mentor gateway and never become an `AppError`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A field outside its closed set. The body echoes the allowed values under `allowed_key`.
    #[error("{message}")]
    InvalidChoice {
        message: String,
        allowed_key: &'static str,
        allowed: Vec<&'static str>,
    },
}

impl From<RoleNotFound> for AppError {
    fn from(err: RoleNotFound) -> Self {
        AppError::NotFound(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut body = Map::new();

        let status = match self {
            AppError::NotFound(msg) => {
                body.insert("error".to_string(), Value::String(msg));
                StatusCode::NOT_FOUND
            }
            AppError::InvalidChoice {
                message,
                allowed_key,
                allowed,
            } => {
                body.insert("error".to_string(), Value::String(message));
                body.insert(allowed_key.to_string(), json!(allowed));
                StatusCode::BAD_REQUEST
            }
        };

        (status, Json(Value::Object(body))).into_response()
    }
}
