use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Which `ContactStore` backs the intake endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Append-only map, gone after a restart.
    Memory,
    /// Acknowledges receipt and keeps nothing.
    Acknowledge,
    /// Durable sqlite table.
    Sqlite,
}

impl FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "acknowledge" | "ack" => Ok(StoreKind::Acknowledge),
            "sqlite" => Ok(StoreKind::Sqlite),
            other => Err(anyhow!(
                "unknown CONTACT_STORE '{}', expected memory, acknowledge or sqlite",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub environment: String, // 'development' for dev, anything else is treated as prod
    pub frontend_url: Option<String>,
    pub contact_store: StoreKind,
    pub database_url: String,
    pub static_dir: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = non_empty("BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?;

        let contact_store = match non_empty("CONTACT_STORE") {
            Some(value) => value.parse::<StoreKind>()?,
            None => StoreKind::Memory,
        };

        Ok(AppConfig {
            bind_addr,
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            frontend_url: non_empty("FRONTEND_URL"),
            contact_store,
            database_url: non_empty("DATABASE_URL").unwrap_or_else(|| "contact.db".to_string()),
            static_dir: non_empty("STATIC_DIR").map(PathBuf::from),
            sentry_dsn: non_empty("SENTRY_DSN"),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
