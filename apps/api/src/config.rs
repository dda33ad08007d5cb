use anyhow::{Context, Result};

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Application configuration loaded from environment variables.
/// Built once in `main` and handed by reference to anything that talks to the provider.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when `GROQ_API_KEY` is unset or blank; `/chat` then degrades to a warning.
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_api_url: optional_env("GROQ_API_URL")
                .unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
