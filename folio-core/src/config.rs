//! Runtime configuration loaded from the environment
//!
//! Built once in `main` and passed by reference into the layers that
//! need it. No ambient globals.

use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::info;

/// Default HTTP port, matching the companion frontend's expectation.
const DEFAULT_PORT: &str = "8001";

/// Runtime configuration for the folio backend.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string (required).
    pub database_url: String,

    /// Address to bind the listener to.
    pub bind: String,

    /// Port to listen on.
    pub port: u16,

    /// Flat directory holding uploaded resume files.
    pub uploads_dir: PathBuf,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set (postgres://...)")?,
            bind: var_or("FOLIO_BIND", "127.0.0.1"),
            port: parse_or("FOLIO_PORT", DEFAULT_PORT)?,
            uploads_dir: PathBuf::from(var_or("FOLIO_UPLOADS_DIR", "uploads")),
            request_timeout_secs: parse_or("FOLIO_REQUEST_TIMEOUT_SECS", "30")?,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.bind, self.port))
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn parse_or<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = var_or(key, default);
    raw.parse()
        .map_err(|e| anyhow::anyhow!("invalid {key} value '{raw}': {e}"))
}
