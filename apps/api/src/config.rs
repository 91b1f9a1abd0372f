use anyhow::{Context, Result};

use crate::dates::format::DateLocale;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub ip_lookup_url: String,
    pub default_locale: DateLocale,
    pub port: u16,
    pub rust_log: String,
}

pub const DEFAULT_IP_LOOKUP_URL: &str = "https://ipapi.co";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            ip_lookup_url: std::env::var("IP_LOOKUP_URL")
                .unwrap_or_else(|_| DEFAULT_IP_LOOKUP_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            default_locale: match std::env::var("DEFAULT_LOCALE") {
                Ok(tag) => tag
                    .parse::<DateLocale>()
                    .context("DEFAULT_LOCALE must be one of en-US, en-GB, de, fr, es")?,
                Err(_) => DateLocale::default(),
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
