//! API Configuration
//!
//! Read once from the environment at startup.

use anyhow::{Context, bail};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Startup configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PORT`
    pub port: u16,
    /// `DATABASE_URL`
    pub database_url: String,
    /// `DATABASE_MAX_CONNECTIONS`
    pub database_max_connections: u32,
    /// `DATABASE_ACQUIRE_TIMEOUT_SECS`, how long a query waits for a connection
    pub database_acquire_timeout: Duration,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        // Blank values count as unset
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => bail!("DATABASE_URL must be set in environment"),
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}")
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        if database_max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let acquire_timeout_secs = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().with_context(|| {
                format!("DATABASE_ACQUIRE_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}")
            })?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        if acquire_timeout_secs == 0 {
            bail!("DATABASE_ACQUIRE_TIMEOUT_SECS must be at least 1");
        }

        Ok(Self {
            port,
            database_url,
            database_max_connections,
            database_acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    /// All interfaces on the configured port
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
