//! Axum route handlers for the read-only catalog.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::catalog::{find_roadmap, roadmaps::RoadmapIndex, Interest, Level, ROLE_ROADMAPS};
use crate::errors::AppError;

#[derive(Serialize)]
pub struct InterestsResponse {
    pub interests: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct LevelsResponse {
    pub levels: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct RoadmapsResponse {
    pub role_roadmaps: RoadmapIndex,
}

#[derive(Serialize)]
pub struct RoadmapResponse {
    pub role: &'static str,
    pub steps: &'static [&'static str],
}

/// GET /interests
pub async fn handle_list_interests() -> Json<InterestsResponse> {
    Json(InterestsResponse {
        interests: Interest::labels(),
    })
}

/// GET /levels
pub async fn handle_list_levels() -> Json<LevelsResponse> {
    Json(LevelsResponse {
        levels: Level::labels(),
    })
}

/// GET /role_roadmaps
pub async fn handle_list_roadmaps() -> Json<RoadmapsResponse> {
    Json(RoadmapsResponse {
        role_roadmaps: RoadmapIndex(ROLE_ROADMAPS),
    })
}

/// GET /role_roadmaps/:role
///
/// Matches the role name case-insensitively and answers with the canonical name.
pub async fn handle_get_roadmap(
    Path(role): Path<String>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let roadmap = find_roadmap(&role)?;
    Ok(Json(RoadmapResponse {
        role: roadmap.role,
        steps: roadmap.steps,
    }))
}
