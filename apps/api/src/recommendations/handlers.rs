//! Axum route handler for the Recommendations API.

use axum::{body::Bytes, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::catalog::{Interest, Level};
use crate::errors::AppError;
use crate::extract::{json_object_or_default, string_field};
use crate::recommendations::composer::compose_recommendations;

/// Both fields are optional on the wire; a missing or non-string field is rejected
/// like an unknown one.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub interest: Option<Value>,
    #[serde(default)]
    pub level: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub interest: Interest,
    pub level: Level,
    pub recommendations: Vec<String>,
}

/// POST /recommendations
///
/// Validates `interest` then `level` against the closed sets before composing.
pub async fn handle_recommendations(body: Bytes) -> Result<Json<RecommendationResponse>, AppError> {
    let request: RecommendationRequest = json_object_or_default(&body);

    let interest = string_field(&request.interest)
        .and_then(Interest::parse)
        .ok_or_else(|| AppError::InvalidChoice {
            message: "Invalid or missing 'interest'".to_string(),
            allowed_key: "allowed_interests",
            allowed: Interest::labels(),
        })?;

    let level = string_field(&request.level)
        .and_then(Level::parse)
        .ok_or_else(|| AppError::InvalidChoice {
            message: "Invalid or missing 'level'".to_string(),
            allowed_key: "allowed_levels",
            allowed: Level::labels(),
        })?;

    debug!("Composing recommendations for {interest:?} / {level:?}");

    Ok(Json(RecommendationResponse {
        interest,
        level,
        recommendations: compose_recommendations(interest, level),
    }))
}
