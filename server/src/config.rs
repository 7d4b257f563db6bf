//! Server settings parsed from environment variables.
//!
//! DESIGN
//! ======
//! Only the listener address is configurable here. Leptos build options
//! (site root, output name) come from `[workspace.metadata.leptos]` through
//! `leptos::config::get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "homefix_server=info,tower_http=info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },
    #[error("invalid HOMEFIX_SITE_ADDR: {value:?}")]
    InvalidSiteAddr { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Full listen address; takes precedence over `port` when set.
    pub site_addr: Option<SocketAddr>,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000, listens on all interfaces
    /// - `HOMEFIX_SITE_ADDR`: full `host:port`, overrides `PORT`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("HOMEFIX_SITE_ADDR").ok().as_deref(),
        )
    }

    pub(crate) fn from_values(port: Option<&str>, site_addr: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort { value: raw.to_owned() })?,
        };
        let site_addr = match site_addr.map(str::trim).filter(|v| !v.is_empty()) {
            None => None,
            Some(raw) => Some(raw.parse().map_err(|_| ConfigError::InvalidSiteAddr { value: raw.to_owned() })?),
        };
        Ok(Self { port, site_addr })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.site_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port)))
    }
}
