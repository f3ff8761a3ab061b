//! Server configuration from the environment

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Which origins may call the API from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`
    Any,
    /// Explicit origin list
    List(Vec<String>),
    /// Local development servers only
    Localhost,
}

/// Runtime settings for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `SHELFBOARD_ADDR`
    pub addr: SocketAddr,

    /// `SHELFBOARD_CORS_ORIGINS`: "*" or a comma-separated list
    pub cors_origins: CorsOrigins,

    /// `SHELFBOARD_STATIC_DIR`: front end served at `/`
    pub static_dir: Option<PathBuf>,

    /// `SHELFBOARD_EVENT_CAPACITY`: buffered SSE events per subscriber
    pub event_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origins: CorsOrigins::Localhost,
            static_dir: None,
            event_capacity: 100,
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("SHELFBOARD_ADDR") {
            config.addr = addr
                .parse()
                .with_context(|| format!("Invalid SHELFBOARD_ADDR: {}", addr))?;
        }

        if let Some(origins) = lookup("SHELFBOARD_CORS_ORIGINS") {
            config.cors_origins = if origins.trim() == "*" {
                CorsOrigins::Any
            } else {
                CorsOrigins::List(
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                )
            };
        }

        config.static_dir = lookup("SHELFBOARD_STATIC_DIR").map(PathBuf::from);

        if let Some(capacity) = lookup("SHELFBOARD_EVENT_CAPACITY") {
            let capacity: usize = capacity
                .parse()
                .with_context(|| format!("Invalid SHELFBOARD_EVENT_CAPACITY: {}", capacity))?;
            if capacity == 0 {
                anyhow::bail!("SHELFBOARD_EVENT_CAPACITY must be at least 1");
            }
            config.event_capacity = capacity;
        }

        Ok(config)
    }
}
