use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
/// Used by the binary when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_raw = lookup("CLINIC_HOST").unwrap_or_else(|| {
            warn!("CLINIC_HOST not set, using {}", DEFAULT_HOST);
            DEFAULT_HOST.to_string()
        });
        let host = host_raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
            key: "CLINIC_HOST",
            value: host_raw.clone(),
        })?;

        let port = match lookup("CLINIC_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "CLINIC_PORT",
                value: raw,
            })?,
            None => {
                warn!("CLINIC_PORT not set, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
