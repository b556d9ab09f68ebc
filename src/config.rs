//! Environment-supplied server configuration.
//!
//! All connection and listener settings come from the environment (or a
//! `.env` file loaded by the binary); nothing is hard-coded. The store
//! connection string in particular is required and carries whatever
//! credentials the deployment needs.

use axum::http::HeaderValue;
use std::env;
use std::net::IpAddr;
use std::time::Duration;
use thiserror::Error;

/// Default HTTP listener port.
const DEFAULT_PORT: u16 = 8080;
/// Default bind address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
/// Default per-call store timeout, in seconds.
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

/// Errors returned while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `DATABASE_URL` is not set.
    #[error("DATABASE_URL must be set, in the environment or a .env file")]
    MissingDatabaseUrl,

    /// `PORT` is not a valid port number.
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),

    /// `BIND_ADDR` is not a valid IP address.
    #[error("invalid BIND_ADDR value '{0}'")]
    InvalidBindAddr(String),

    /// An entry in `ALLOWED_ORIGINS` is not a valid header value.
    #[error("invalid origin in ALLOWED_ORIGINS: '{0}'")]
    InvalidOrigin(String),

    /// `STORE_TIMEOUT_SECS` is not a positive integer.
    #[error("invalid STORE_TIMEOUT_SECS value '{0}'")]
    InvalidStoreTimeout(String),
}

/// Server configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: IpAddr,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Cross-origin allow-list; empty admits any origin.
    pub allowed_origins: Vec<HeaderValue>,
    /// Upper bound for each store call.
    pub store_timeout: Duration,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// Recognised variables: `DATABASE_URL` (required), `PORT`,
    /// `BIND_ADDR`, `ALLOWED_ORIGINS` (comma-separated), and
    /// `STORE_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is absent or a
    /// supplied value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        let bind_addr_raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_addr_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr_raw.clone()))?;

        let allowed_origins = parse_allowed_origins(
            env::var("ALLOWED_ORIGINS").unwrap_or_default().as_str(),
        )?;

        let store_timeout = match env::var("STORE_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::InvalidStoreTimeout(raw.clone()))?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
        };

        Ok(Self {
            database_url,
            bind_addr,
            port,
            allowed_origins,
            store_timeout,
        })
    }
}

/// Parses a comma-separated origin allow-list, skipping blank entries.
fn parse_allowed_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_owned()))
        })
        .collect()
}
