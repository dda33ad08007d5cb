//! Axum route handlers for the AI mentor.

use axum::{body::Bytes, extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract::{json_object_or_default, string_field};
use crate::mentor::{ask_mentor, formatter::format_as_bullets};
use crate::state::AppState;

pub const EMPTY_QUESTION_REPLY: &str = "Please type a question.";

const MENTOR_PAGE: &str = include_str!("../../static/mentor.html");

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// POST /chat
///
/// Always answers 200, whatever the body or `Content-Type`. Blank, missing, or
/// non-string questions get a canned reply without touching the model; provider
/// problems come back as warning text inside `answer`.
pub async fn handle_chat(State(state): State<AppState>, body: Bytes) -> Json<ChatResponse> {
    let request: ChatRequest = json_object_or_default(&body);
    let message = string_field(&request.message).unwrap_or_default().trim();

    if message.is_empty() {
        return Json(ChatResponse {
            answer: EMPTY_QUESTION_REPLY.to_string(),
        });
    }

    let raw = ask_mentor(state.llm.as_ref(), message).await;
    Json(ChatResponse {
        answer: format_as_bullets(&raw),
    })
}

/// GET /mentor
pub async fn handle_mentor_page() -> Html<&'static str> {
    Html(MENTOR_PAGE)
}
