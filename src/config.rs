//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Port for the Prometheus scrape endpoint. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    /// Log line format.
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            metrics_port: None,
            rust_log: default_log_level(),
            verbose: false,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(ApiError::InvalidConfig(format!(
                "HOST must be an IP address, got {:?}",
                self.host
            )));
        }

        if self.port == 0 {
            return Err(ApiError::InvalidConfig("PORT must be non-zero".to_string()));
        }

        match self.metrics_port {
            Some(0) => {
                return Err(ApiError::InvalidConfig(
                    "METRICS_PORT must be non-zero".to_string(),
                ))
            }
            Some(p) if p == self.port => {
                return Err(ApiError::InvalidConfig(
                    "METRICS_PORT must differ from PORT".to_string(),
                ))
            }
            _ => {}
        }

        Ok(())
    }

    /// Socket address of the API server.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ApiError::InvalidConfig(format!("invalid HOST {:?}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Socket address of the metrics exporter, if enabled.
    pub fn metrics_addr(&self) -> Result<Option<SocketAddr>> {
        match self.metrics_port {
            Some(port) => Ok(Some(SocketAddr::new(self.bind_addr()?.ip(), port))),
            None => Ok(None),
        }
    }
}
