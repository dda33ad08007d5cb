pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::mentor::handlers as mentor;
use crate::recommendations::handlers as recommendations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        // Static catalog
        .route("/interests", get(catalog::handle_list_interests))
        .route("/levels", get(catalog::handle_list_levels))
        .route("/role_roadmaps", get(catalog::handle_list_roadmaps))
        .route("/role_roadmaps/:role", get(catalog::handle_get_roadmap))
        // Learning paths
        .route(
            "/recommendations",
            post(recommendations::handle_recommendations),
        )
        // AI mentor
        .route("/chat", post(mentor::handle_chat))
        .route("/mentor", get(mentor::handle_mentor_page))
        .with_state(state)
}
