//! AI mentor — forwards free-text questions to the chat model and reformats the reply.
//!
//! Provider failures never become HTTP errors: `ask_mentor` always yields text,
//! either the model's answer or a visible warning explaining what went wrong.

pub mod formatter;
pub mod handlers;
pub mod prompts;

use tracing::{debug, error};

use crate::llm_client::{ChatCompletion, LlmError};
use crate::mentor::prompts::{build_mentor_prompt, MENTOR_SYSTEM};

pub const MISSING_KEY_WARNING: &str =
    "⚠ GROQ_API_KEY is not set on the server. Please configure it first.";

/// Asks the mentor model one question and returns its raw reply or a warning string.
pub async fn ask_mentor(llm: &dyn ChatCompletion, question: &str) -> String {
    let prompt = build_mentor_prompt(question);

    match llm.complete(MENTOR_SYSTEM, &prompt).await {
        Ok(answer) => answer,
        Err(LlmError::MissingApiKey) => {
            debug!("Mentor question answered with missing-key warning");
            MISSING_KEY_WARNING.to_string()
        }
        Err(e) => {
            error!("Groq error: {e}");
            format!("⚠ Groq error: {e}")
        }
    }
}
