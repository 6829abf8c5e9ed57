//! # Client Configuration
//!
//! ## Environment Variables
//!
//! - `SLOTBOOK_API_URL`: Base URL of the schedule service (required)
//! - `SLOTBOOK_API_TOKEN`: Bearer token sent with every request (optional)
//! - `SLOTBOOK_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `LOG_LEVEL`: Logging level (default: "info")

use std::env;

use eyre::{Result, WrapErr, eyre};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the schedule service, without a trailing slash
    pub api_url: String,

    /// Bearer token for authenticated endpoints
    pub api_token: Option<String>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Log level for the application
    pub log_level: Level,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_token: None,
            request_timeout: 30,
            log_level: Level::INFO,
        }
    }

    /// Creates a ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `SLOTBOOK_API_URL` is not set
    /// - `SLOTBOOK_REQUEST_TIMEOUT_SECONDS` is not a whole number of seconds
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("SLOTBOOK_API_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| eyre!("SLOTBOOK_API_URL environment variable must be set"))?;

        let api_token = lookup("SLOTBOOK_API_TOKEN").filter(|token| !token.is_empty());

        let request_timeout = match lookup("SLOTBOOK_REQUEST_TIMEOUT_SECONDS") {
            Some(value) => value
                .parse::<u64>()
                .wrap_err("Invalid SLOTBOOK_REQUEST_TIMEOUT_SECONDS value")?,
            None => 30,
        };

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            api_token,
            request_timeout,
            log_level,
            ..Self::new(api_url)
        })
    }

    /// Joins `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}
