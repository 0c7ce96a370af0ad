use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.rugcheck.xyz";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,    // RugCheck base URL, without trailing slash
    pub timeout: Duration,  // Per-request timeout
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_vars(
            env::var("RUGCHECK_API_URL").ok(),
            env::var("RUGCHECK_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(api_url: Option<String>, timeout_secs: Option<String>) -> Result<Self> {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match timeout_secs {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("Failed to parse RUGCHECK_TIMEOUT_SECS as integer")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
