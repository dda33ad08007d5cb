/// LLM Client — the single point of entry for outbound chat completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the provider directly.
/// The provider speaks the OpenAI-compatible chat completions protocol (Groq).
///
/// Model: llama-3.1-8b-instant (hardcoded, not configurable)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// The model used for every chat completion.
pub const MODEL: &str = "llama-3.1-8b-instant";
/// Low sampling temperature keeps mentor answers focused.
pub const TEMPERATURE: f64 = 0.3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GROQ_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// A chat completion backend: one system instruction plus one user prompt in, reply text out.
///
/// Carried in `AppState` as `Arc<dyn ChatCompletion>`.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Production chat completion client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_url: config.groq_api_url.clone(),
            api_key: config.groq_api_key.clone(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    /// Sends a single chat completion request and returns the first choice's text.
    /// Short-circuits with `MissingApiKey` before any network I/O. Never retries.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;
        debug!("LLM call succeeded: choices={}", chat_response.choices.len());

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn config_for(url: String, api_key: Option<&str>) -> Config {
        Config {
            groq_api_key: api_key.map(str::to_string),
            groq_api_url: url,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "hi",
                },
            ],
            temperature: TEMPERATURE,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "model": "llama-3.1-8b-instant",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ],
                "temperature": 0.3
            })
        );
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200);
            })
            .await;

        let client = LlmClient::new(&config_for(server.url("/chat"), None)).unwrap();
        assert!(!client.has_api_key());

        let err = client.complete("sys", "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_success_returns_first_choice() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/openai/v1/chat/completions")
                    .header("authorization", "Bearer gsk-test")
                    .json_body_partial(r#"{"model": "llama-3.1-8b-instant", "temperature": 0.3}"#);
                then.status(200).json_body(json!({
                    "choices": [
                        {"message": {"role": "assistant", "content": "Step 1: learn Rust"}},
                        {"message": {"role": "assistant", "content": "ignored"}}
                    ]
                }));
            })
            .await;

        let config = config_for(server.url("/openai/v1/chat/completions"), Some("gsk-test"));
        let client = LlmClient::new(&config).unwrap();

        let text = client.complete("sys", "hi").await.unwrap();
        assert_eq!(text, "Step 1: learn Rust");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_error_message_extracted() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(401)
                    .json_body(json!({"error": {"message": "Invalid API Key"}}));
            })
            .await;

        let client = LlmClient::new(&config_for(server.url("/chat"), Some("bad"))).unwrap();

        match client.complete("sys", "hi").await.unwrap_err() {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API Key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_api_error_falls_back_to_raw_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(503).body("upstream unavailable");
            })
            .await;

        let client = LlmClient::new(&config_for(server.url("/chat"), Some("k"))).unwrap();

        match client.complete("sys", "hi").await.unwrap_err() {
            LlmError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_null_content_is_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200)
                    .json_body(json!({"choices": [{"message": {"content": null}}]}));
            })
            .await;

        let client = LlmClient::new(&config_for(server.url("/chat"), Some("k"))).unwrap();
        let err = client.complete("sys", "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_no_choices_is_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({"choices": []}));
            })
            .await;

        let client = LlmClient::new(&config_for(server.url("/chat"), Some("k"))).unwrap();
        let err = client.complete("sys", "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }
}
