use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::storage::store::DEFAULT_RESUME_DIR;

/// Application configuration loaded from environment variables.
/// Every key has a default, so the service starts with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory for the one-file-per-resume disk mirror.
    pub resume_dir: PathBuf,
    pub rust_log: String,
}

/// Raw, unvalidated values as read from the environment.
#[derive(Debug, Default)]
struct RawConfig {
    port: Option<String>,
    resume_dir: Option<String>,
    rust_log: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_raw(RawConfig {
            port: std::env::var("PORT").ok(),
            resume_dir: std::env::var("RESUME_DIR").ok(),
            rust_log: std::env::var("RUST_LOG").ok(),
        })
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        Ok(Config {
            port: raw
                .port
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            resume_dir: raw
                .resume_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESUME_DIR)),
            rust_log: raw.rust_log.unwrap_or_else(|| "info".to_string()),
        })
    }
}
