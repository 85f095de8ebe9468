use std::env;

use anyhow::{Context, Result};

use crate::remote::client::DEFAULT_API_URL;
use crate::tags::local::DEFAULT_COUNT;

/// Central configuration loaded from environment variables.
///
/// The API key is a secret and only ever comes from the environment (or a
/// CLI flag). The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote generation endpoint (defaults to the public hashtag API).
    pub api_url: String,
    /// Default credential for the remote endpoint. Empty means local generation only.
    pub api_key: String,
    /// Language sent with remote requests
    pub language: String,
    /// How many hashtags to return when the caller doesn't say
    pub default_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            language: "en".to_string(),
            default_count: DEFAULT_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only a malformed HASHTAGGER_COUNT is an error.
    pub fn load() -> Result<Self> {
        let default_count = match env::var("HASHTAGGER_COUNT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("HASHTAGGER_COUNT must be a whole number, got {raw:?}"))?,
            Err(_) => DEFAULT_COUNT,
        };

        Ok(Self {
            api_url: env::var("HASHTAGGER_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key: env::var("HASHTAGGER_API_KEY").unwrap_or_default(),
            language: env::var("HASHTAGGER_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
            default_count,
        })
    }

    /// The configured API key, if one is set.
    pub fn credential(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }
}
