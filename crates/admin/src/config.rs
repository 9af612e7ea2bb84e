//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TIENDA_API_URL` - Store API base URL (default: <https://tienda-costa-bakend.vercel.app>)
//! - `TIENDA_API_TIMEOUT_SECS` - Store API request timeout in seconds (default: 10)
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `LOG_FORMAT` - `text` or `json` (default: text)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "https://tienda-costa-bakend.vercel.app";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines (local development).
    #[default]
    Text,
    /// One JSON object per event (log aggregation).
    Json,
}

/// Store API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build an API configuration for a base URL with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_api_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
        })
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = parse_api_url(&env_or_default(lookup, "TIENDA_API_URL", DEFAULT_API_URL))?;
        let timeout_secs = env_or_default(
            lookup,
            "TIENDA_API_TIMEOUT_SECS",
            &DEFAULT_API_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("TIENDA_API_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Store API configuration
    pub api: ApiConfig,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = env_or_default(&lookup, "ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = env_or_default(&lookup, "ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let api = ApiConfig::from_lookup(&lookup)?;
        let log_format = match env_or_default(&lookup, "LOG_FORMAT", "text")
            .to_ascii_lowercase()
            .as_str()
        {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "LOG_FORMAT".to_string(),
                    format!("expected 'text' or 'json', got '{other}'"),
                ));
            }
        };
        let sentry_dsn = lookup("SENTRY_DSN");
        let sentry_environment = lookup("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = lookup("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = lookup("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            api,
            log_format,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("TIENDA_API_URL".to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "TIENDA_API_URL".to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url)
}
