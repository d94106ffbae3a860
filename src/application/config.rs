/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_API_BASE, DEFAULT_INACTIVITY_MINUTES, DEFAULT_SESSION_FILE, DEFAULT_TIMEOUT_SECS,
};
use crate::model::auth::Credentials;
use crate::utils::config::{get_env_or_default, get_env_or_none, get_env_url_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Lifeline API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Session persistence configuration
    pub session: SessionConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Optional login credentials, used by demos and unattended tools
    #[serde(skip)]
    pub credentials: Option<Credentials>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the REST API, without trailing slash (e.g. `http://host/api`)
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for session persistence
pub struct SessionConfig {
    /// File backing the persistent ("local") store
    pub file: String,
    /// Minutes of inactivity after which the session is logged out
    pub inactivity_minutes: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            period_seconds: 1,
            burst_size: 50,
        }
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    ///
    /// Recognised variables: `LIFELINE_API_BASE`, `LIFELINE_API_TIMEOUT`,
    /// `LIFELINE_SESSION_FILE`, `LIFELINE_INACTIVITY_MINUTES`,
    /// `LIFELINE_RATE_LIMIT_MAX_REQUESTS`, `LIFELINE_RATE_LIMIT_PERIOD_SECONDS`,
    /// `LIFELINE_RATE_LIMIT_BURST_SIZE`, `LIFELINE_USERNAME` and
    /// `LIFELINE_PASSWORD`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let defaults = RateLimiterConfig::default();

        let username: Option<String> = get_env_or_none("LIFELINE_USERNAME");
        let password: Option<String> = get_env_or_none("LIFELINE_PASSWORD");
        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            (Some(_), None) => {
                warn!("LIFELINE_USERNAME is set but LIFELINE_PASSWORD is missing");
                None
            }
            _ => None,
        };

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_url_or_default("LIFELINE_API_BASE", DEFAULT_API_BASE),
                timeout: get_env_or_default("LIFELINE_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            session: SessionConfig {
                file: get_env_or_default(
                    "LIFELINE_SESSION_FILE",
                    String::from(DEFAULT_SESSION_FILE),
                ),
                inactivity_minutes: get_env_or_default(
                    "LIFELINE_INACTIVITY_MINUTES",
                    DEFAULT_INACTIVITY_MINUTES,
                ),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "LIFELINE_RATE_LIMIT_MAX_REQUESTS",
                    defaults.max_requests,
                ),
                period_seconds: get_env_or_default(
                    "LIFELINE_RATE_LIMIT_PERIOD_SECONDS",
                    defaults.period_seconds,
                ),
                burst_size: get_env_or_default(
                    "LIFELINE_RATE_LIMIT_BURST_SIZE",
                    defaults.burst_size,
                ),
            },
            credentials,
        }
    }

    /// Creates a configuration pointing at `base_url` with every other value defaulted
    ///
    /// Does not read the environment; handy for tests and embedding.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: crate::utils::config::normalize_base_url(base_url),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            session: SessionConfig {
                file: String::from(DEFAULT_SESSION_FILE),
                inactivity_minutes: DEFAULT_INACTIVITY_MINUTES,
            },
            rate_limiter: RateLimiterConfig::default(),
            credentials: None,
        }
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rest_api.timeout)
    }

    /// Inactivity window as a [`Duration`]
    #[must_use]
    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.session.inactivity_minutes * 60)
    }
}
