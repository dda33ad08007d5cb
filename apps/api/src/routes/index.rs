use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Self-description of the service and its endpoints.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "app": "NEXORA Course & Roadmap Advisor + Groq AI",
        "description": "Provides static course/roadmap data and an AI mentor endpoint.",
        "endpoints": {
            "/interests": "GET - list available interests/tracks",
            "/levels": "GET - list available levels",
            "/role_roadmaps": "GET - list all roles and roadmaps",
            "/role_roadmaps/<role>": "GET - roadmap for a specific role",
            "/recommendations": "POST - body: {interest, level} -> learning path",
            "/chat": "POST - body: {message} -> Groq LLaMA3 AI answer",
            "/mentor": "GET - HTML UI page"
        }
    }))
}
