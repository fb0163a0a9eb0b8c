//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_DIST_DIR: &str = "client/dist";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0:?}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Directory holding the built client bundle (`index.html`, wasm, assets).
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `DIST_DIR`: default `client/dist`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
            std::env::var("DIST_DIR").ok().as_deref(),
        )
    }

    /// Same as [`Self::from_env`] over explicit raw values.
    pub fn from_values(
        bind_addr: Option<&str>,
        port: Option<&str>,
        dist_dir: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let ip = parse_bind_addr(bind_addr)?;
        let port = parse_port(port)?;
        let dist_dir = dist_dir
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_DIST_DIR);

        Ok(Self { bind: SocketAddr::new(ip, port), dist_dir: PathBuf::from(dist_dir) })
    }

    /// SPA shell served for every path that is not a bundle file.
    pub fn index_html(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BIND_ADDR);
    raw.parse().map_err(|_| ConfigError::InvalidBindAddr(raw.to_owned()))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
