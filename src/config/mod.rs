use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;
use tracing::debug;

use crate::observability::ObservabilitySettings;

/// Prefix for every environment variable read by the service, e.g. `YATRA_PORT`
pub const ENV_PREFIX: &str = "YATRA";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {message}")]
    LoadError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_request_size")]
    pub max_request_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub enable_json_logging: bool,
}

impl Config {
    /// Load configuration from `YATRA_*` environment variables
    pub fn from_environment() -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| ConfigError::LoadError {
                message: format!("Failed to load configuration: {}", e),
            })?;

        Self::from_settings(&settings)
    }

    /// Build configuration from already-collected settings
    pub fn from_settings(settings: &config::Config) -> Result<Self, ConfigError> {
        let config = Config {
            server: load_section(settings, "server")?,
            observability: load_section(settings, "observability")?,
        };

        config.validate()?;
        debug!("Configuration: {:?}", config);

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Server host is not an IP address: {}", self.server.host),
            });
        }

        if self.server.max_request_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "Max request size cannot be 0".to_string(),
            });
        }

        if self.observability.service_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Service name cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn load_section<T: DeserializeOwned>(
    settings: &config::Config,
    section: &str,
) -> Result<T, ConfigError> {
    settings
        .clone()
        .try_deserialize()
        .map_err(|e| ConfigError::LoadError {
            message: format!("Failed to deserialize {} config: {}", section, e),
        })
}

impl ServerConfig {
    /// Socket address to bind; the host is validated when the config is loaded
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ConfigError::ValidationError {
                message: format!("Invalid host {}: {}", self.host, e),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl ObservabilityConfig {
    pub fn settings(&self) -> ObservabilitySettings<'_> {
        ObservabilitySettings {
            service_name: &self.service_name,
            service_version: &self.service_version,
            otlp_endpoint: self.otlp_endpoint.as_deref(),
            log_level: &self.log_level,
            enable_json_logging: self.enable_json_logging,
        }
    }
}

// Default value functions
pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_max_request_size() -> usize {
    1024 * 1024 // 1MB
}

pub(crate) fn default_service_name() -> String {
    "yatra-rs".to_string()
}

pub(crate) fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}
