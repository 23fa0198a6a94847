use anyhow::{Context, Result};

use crate::models::candidate::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Everything is optional: the API key is normally entered through the
/// Settings endpoint at runtime, `GEMINI_API_KEY` only pre-seeds it.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Initial API key for the session settings; empty means unconfigured.
    pub gemini_api_key: String,
    pub default_model: String,
    /// Seed the store with mock candidates at startup (dashboard demos).
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            default_model: std::env::var("DEFAULT_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}
