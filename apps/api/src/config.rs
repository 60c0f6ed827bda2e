use anyhow::{Context, Result};

/// Name of the environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
///
/// The Gemini API key is NOT part of this struct. It is resolved per request
/// through [`ApiKeySource`] so secret rotation takes effect without a restart,
/// and a missing key fails the request rather than the boot.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub gemini_base_url: String,
    pub gemini_timeout_secs: u64,
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
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_timeout_secs: std::env::var("GEMINI_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

/// Where the handler obtains the generation-service API key.
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    /// Read the named environment variable on every call.
    Env(String),
    /// Fixed value, used by tests. `None` simulates an unprovisioned secret.
    Fixed(Option<String>),
}

impl ApiKeySource {
    pub fn from_env_var() -> Self {
        ApiKeySource::Env(API_KEY_VAR.to_string())
    }

    /// Returns the current key, treating blank values as absent.
    pub fn current(&self) -> Option<String> {
        let key = match self {
            ApiKeySource::Env(var) => std::env::var(var).ok(),
            ApiKeySource::Fixed(key) => key.clone(),
        };
        key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
    }
}
