//! Support configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SUPPORT_HOST` - Bind address (default: 127.0.0.1)
//! - `SUPPORT_PORT` - Listen port (default: 3002)
//! - `SUPPORT_SEED_DEMO_DATA` - Seed the demo data set on startup (default: true)
//! - `RUST_LOG` - Tracing filter (default: `coralbay_support=info,tower_http=debug`)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_PORT: u16 = 3002;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Support application configuration.
#[derive(Debug, Clone)]
pub struct SupportConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Listen port.
    pub port: u16,
    /// Whether to install the demo data set on startup.
    pub seed_demo_data: bool,
}

impl SupportConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match std::env::var("SUPPORT_HOST") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("SUPPORT_HOST".into(), raw))?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match std::env::var("SUPPORT_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("SUPPORT_PORT".into(), raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let seed_demo_data = match std::env::var("SUPPORT_SEED_DEMO_DATA") {
            Ok(raw) => match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidEnvVar(
                        "SUPPORT_SEED_DEMO_DATA".into(),
                        raw,
                    ));
                }
            },
            Err(_) => true,
        };

        Ok(Self {
            host,
            port,
            seed_demo_data,
        })
    }

    /// The socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            seed_demo_data: true,
        }
    }
}
