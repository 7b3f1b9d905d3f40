//! TOML configuration file parsing

use crate::config::AppConfig;
use crate::error::ConfigError;
use serde::Deserialize;

/// TOML configuration structure
#[derive(Debug, Deserialize)]
pub struct TomlConfig {
    pub container_name_prefix: Option<String>,
    pub published_host: Option<String>,
    pub logging: Option<LoggingConfig>,
    pub docker: Option<DockerConfig>,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Docker configuration
#[derive(Debug, Deserialize)]
pub struct DockerConfig {
    pub socket: Option<String>,
}

/// Load configuration from TOML file
pub fn load_toml_config(path: &str) -> Result<TomlConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_string(),
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
}

/// Apply TOML configuration over base configuration
pub fn apply_toml_config(mut base_config: AppConfig, toml_config: TomlConfig) -> AppConfig {
    if let Some(prefix) = toml_config.container_name_prefix {
        base_config.container_name_prefix = prefix;
    }

    if let Some(host) = toml_config.published_host {
        base_config.published_host = host;
    }

    if let Some(level) = toml_config.logging.and_then(|l| l.level) {
        base_config.log_level = level;
    }

    if let Some(socket) = toml_config.docker.and_then(|d| d.socket) {
        base_config.docker_socket = socket;
    }

    base_config
}
