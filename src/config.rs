//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Bind port (default: `5000`)
//! - `BASE_URL` - Public origin used to build short URLs
//!   (default: `http://localhost:<PORT>`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let base_url = Self::load_base_url(port);
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            host,
            port,
            base_url,
            log_level,
            log_format,
        })
    }

    /// Loads the public base URL, defaulting to `http://localhost:<port>`.
    fn load_base_url(port: u16) -> String {
        env::var("BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| format!("http://localhost:{}", port))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `host`/`port` do not form a socket address
    /// - `base_url` is not an `http(s)://` URL
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        self.listen_addr()?;

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("HOST must be an IP address, got '{}'", self.host))?;

        Ok(SocketAddr::new(ip, self.port))
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}:{}", self.host, self.port);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// Expects `.env` to be loaded already (e.g. via `dotenvy::dotenv()` in `main.rs`).
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially via #[serial]
        unsafe {
            env::remove_var("HOST");
            env::remove_var("PORT");
            env::remove_var("BASE_URL");
            env::remove_var("LOG_FORMAT");
        }
    }

    fn valid_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 5000,
            base_url: "http://localhost:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.port = 0;
        assert!(config.validate().is_err());
        config.port = 5000;

        config.host = "not a host".to_string();
        assert!(config.validate().is_err());
        config.host = "::".to_string();
        assert!(config.validate().is_ok());
        config.host = "0.0.0.0".to_string();

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://s.example.com".to_string();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_listen_addr() {
        let config = valid_config();
        let addr = config.listen_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:5000");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.log_format, "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_base_url_follows_port() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("PORT", "8080");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_base_url_override_trims_slash() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("BASE_URL", "https://s.example.com/");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "https://s.example.com");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::set_var("PORT", "70000");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
