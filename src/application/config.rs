/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::DEFAULT_BASE_URL;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

fn redact_secret<S: Serializer>(secret: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match secret {
        Some(_) => serializer.serialize_some("***"),
        None => serializer.serialize_none(),
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Authentication credentials for the Balanced API
pub struct Credentials {
    /// API key secret, sent as the basic auth username with an empty password.
    /// `None` sends unauthenticated requests, which is what creating the
    /// very first API key requires.
    #[serde(serialize_with = "redact_secret")]
    pub secret: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every request path is resolved against
    pub base_url: String,
    /// Optional transport timeout in seconds, applied by reqwest itself
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Balanced API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file if present, then reads the variables listed on
    /// [`Config::from_env`].
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }
        Self::from_env()
    }

    /// Creates a configuration from the process environment only
    ///
    /// Reads:
    /// * `BALANCED_SECRET` - API key secret (optional)
    /// * `BALANCED_BASE_URL` - base URL, defaults to the production host
    /// * `BALANCED_TIMEOUT` - transport timeout in seconds (optional)
    pub fn from_env() -> Self {
        let secret: Option<String> = get_env_or_none("BALANCED_SECRET");
        if secret.is_none() {
            warn!("BALANCED_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { secret },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("BALANCED_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_none("BALANCED_TIMEOUT"),
            },
        }
    }

    /// Creates a configuration without touching the environment
    pub fn with_base_url_and_secret(base_url: &str, secret: Option<&str>) -> Self {
        Config {
            credentials: Credentials {
                secret: secret.map(str::to_string),
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: None,
            },
        }
    }

    /// Replaces the secret
    #[must_use]
    pub fn with_secret(mut self, secret: &str) -> Self {
        self.credentials.secret = if secret.is_empty() {
            None
        } else {
            Some(secret.to_string())
        };
        self
    }

    /// Replaces the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = base_url.to_string();
        self
    }

    /// Sets the transport timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = Some(timeout_secs);
        self
    }
}
