//! Server process configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Port used when the environment specifies nothing.
const DEFAULT_PORT: u16 = 5000;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `TASKBOARD_ADDR` was set but did not parse as a socket address.
    #[error("invalid TASKBOARD_ADDR '{0}', expected host:port")]
    InvalidAddr(String),

    /// `PORT` was set but did not parse as a port number.
    #[error("invalid PORT '{0}', expected an integer port")]
    InvalidPort(String),
}

/// Server bind configuration, read once at startup and injected
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// `TASKBOARD_ADDR` takes precedence when set; otherwise `PORT`
    /// selects the port on all interfaces; otherwise port 5000 is used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(raw) = std::env::var("TASKBOARD_ADDR") {
            let bind_addr = raw
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(raw.clone()))?;
            return Ok(Self { bind_addr });
        }
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
        }
    }
}
