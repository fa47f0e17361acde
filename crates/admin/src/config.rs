//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_USERNAME` - Admin login username (default: admin)
//! - `ADMIN_PASSWORD` - Admin login password (default: admin123)
//!
//! The default credentials exist so the demo runs out of the box; any real
//! deployment must override `ADMIN_PASSWORD`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Admin login username
    pub admin_username: String,
    /// Admin login password, kept out of Debug output
    pub admin_password: SecretString,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3001,
            admin_username: "admin".to_owned(),
            admin_password: SecretString::from("admin123"),
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        Ok(Self {
            host: parse_env("ADMIN_HOST", defaults.host)?,
            port: parse_env("ADMIN_PORT", defaults.port)?,
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or(defaults.admin_username),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .map_or(defaults.admin_password, SecretString::from),
        })
    }

    /// The socket address to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_owned(), raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.admin_password.expose_secret(), "admin123");
    }

    #[test]
    fn test_password_not_in_debug_output() {
        let config = AdminConfig::default();
        let debug = format!("{config:?}");
        assert!(!debug.contains("admin123"));
    }
}
