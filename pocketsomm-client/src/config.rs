//! Client configuration.

use std::env;
use std::time::Duration;

/// Environment variable naming the backend base URL.
pub const BASE_URL_ENV: &str = "POCKETSOMM_API_URL";

/// Environment variable overriding the whole-request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "POCKETSOMM_TIMEOUT_SECS";

/// Environment variable overriding the read timeout, in seconds.
pub const READ_TIMEOUT_ENV: &str = "POCKETSOMM_READ_TIMEOUT_SECS";

/// Fallback base URL: a backend running locally on its default port.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default whole-request timeout. Photo and menu-PDF uploads go through
/// model inference on the backend and can legitimately take this long.
const DEFAULT_TIMEOUT_SECS: u64 = 240;

/// Default read timeout between response body chunks. Stays under the
/// whole-request cap, so a stalled response fails before the cap is hit.
const DEFAULT_READ_TIMEOUT_SECS: u64 = 120;

/// Connection settings for a [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// Whole-request timeout, connect to last body byte.
    pub timeout: Duration,
    /// Read timeout between response body chunks.
    pub read_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Configuration for the given base URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read configuration from the environment.
    ///
    /// Recognized variables, all optional:
    ///
    /// - [`BASE_URL_ENV`]: base URL, defaulting to [`DEFAULT_BASE_URL`]
    /// - [`TIMEOUT_ENV`]: whole-request timeout in seconds
    /// - [`READ_TIMEOUT_ENV`]: read timeout in seconds
    ///
    /// Unparseable timeout values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var(BASE_URL_ENV).unwrap_or(defaults.base_url),
            timeout: env_duration(TIMEOUT_ENV).unwrap_or(defaults.timeout),
            read_timeout: env_duration(READ_TIMEOUT_ENV).unwrap_or(defaults.read_timeout),
        }
    }
}

fn env_duration(var: &str) -> Option<Duration> {
    env::var(var).ok()?.parse().ok().map(Duration::from_secs)
}
