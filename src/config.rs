// src/config.rs
use std::env;

use anyhow::Context;

const DEFAULT_MODEL: &str = "models/gemini-2.5-flash";

pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub port: u16,
    pub timeout_ms: u64,
}

impl AppConfig {
    /// Read configuration from the environment. `GEMINI_API_KEY` is the only
    /// required variable; everything else falls back to a default.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY must be set (see .env.example)")?;

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let timeout_ms = env::var("GEMINI_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(30_000);

        Ok(Self {
            api_key,
            model,
            port,
            timeout_ms,
        })
    }
}
