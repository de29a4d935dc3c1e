use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
const DEFAULT_MAX_RECORDS: usize = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR {value:?} is not a socket address: {source}")]
    BindAddr {
        value: String,
        source: AddrParseError,
    },
    #[error("CORS_ORIGINS entry {0:?} is not a valid header value")]
    CorsOrigin(String),
    #[error("MAX_RECORDS {0:?} must be a positive integer")]
    MaxRecords(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origins: CorsOrigins,
    /// Directory holding the built frontend, served for every non-API path.
    pub static_dir: PathBuf,
    /// Upper bound on records kept per in-memory collection.
    pub max_records: usize,
}

impl AppConfig {
    /// Reads `BIND_ADDR`, `CORS_ORIGINS`, `STATIC_DIR` and `MAX_RECORDS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        let cors_origins = parse_cors_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()))?;

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let max_records = match lookup("MAX_RECORDS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::MaxRecords(raw)),
            },
            None => DEFAULT_MAX_RECORDS,
        };

        Ok(Self {
            bind_addr,
            cors_origins,
            static_dir,
            max_records,
        })
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::CorsOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
