//! Environment-driven configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::api::DEFAULT_API_URL;

const DEFAULT_TOAST_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub toast_duration: Duration,
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_MS),
            color: true,
        }
    }
}

impl AppConfig {
    /// Load from the process environment, after reading `.env` if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("HRMS_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let toast_ms = match lookup("HRMS_TOAST_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("HRMS_TOAST_MS must be milliseconds, got {:?}", raw))?,
            None => DEFAULT_TOAST_MS,
        };

        Ok(Self {
            api_url,
            toast_duration: Duration::from_millis(toast_ms),
            color: lookup("NO_COLOR").is_none(),
        })
    }
}
