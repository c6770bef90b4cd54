//! Runtime configuration loaded from environment variables.
//!
//! `main` loads a `.env` file through `dotenv` before calling [`Config::from_env`],
//! so every value here can also come from that file.

use crate::error::{AppError, Result};
use std::env;
use std::time::Duration;
use tracing::debug;

/// Environment variable holding the IQAir API key.
pub const API_KEY_VAR: &str = "IQAIR_API_KEY";
/// Overrides the provider base URL. Mostly useful against a local mock server.
pub const BASE_URL_VAR: &str = "IQAIR_BASE_URL";
/// Request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "IQAIR_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.airvisual.com/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when the key is unset or empty. Checked only when a request is about to be made.
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_VAR).ok().filter(|k| !k.trim().is_empty());

        let base_url = env::var(BASE_URL_VAR)
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var(TIMEOUT_VAR) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        debug!(
            "Loaded config: base_url={}, timeout={:?}, api_key_set={}",
            base_url,
            timeout,
            api_key.is_some()
        );

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }

    /// Returns the API key or the error that tells the user how to get one.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(AppError::MissingApiKey)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AppError::Config(format!(
            "{} must be a positive number of seconds, got '{}'",
            TIMEOUT_VAR, raw
        ))),
    }
}
