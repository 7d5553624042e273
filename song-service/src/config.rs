//! Service configuration loaded from the environment.
//!
//! Built once at startup and passed down by reference; nothing in the
//! service reads the environment after this point.

use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, Ipv4Addr};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite:songs.db";

/// Log output shape, selected via `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON lines, the production default.
    Json,
    /// Human-readable output for development.
    Pretty,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Interface the server binds to (`BIND_ADDRESS`).
    pub address: IpAddr,
    /// Port the server listens on (`PORT`).
    pub port: u16,
    /// Database connection URL (`DATABASE_URL`).
    pub database_url: String,
    /// Log output shape (`LOG_FORMAT`, `json` or `pretty`).
    pub log_format: LogFormat,
}

impl ServiceConfig {
    /// Read configuration from the environment. A `.env` file is honored
    /// when present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let address = env::var("BIND_ADDRESS")
            .ok()
            .map(|raw| raw.parse::<IpAddr>())
            .transpose()
            .context("BIND_ADDRESS is not a valid IP address")?
            .unwrap_or_else(|| IpAddr::V4(Ipv4Addr::LOCALHOST));

        let port = env::var("PORT")
            .ok()
            .map(|raw| raw.parse::<u16>())
            .transpose()
            .context("PORT is not a valid port number")?
            .unwrap_or(DEFAULT_PORT);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        };

        Ok(Self {
            address,
            port,
            database_url,
            log_format,
        })
    }
}
