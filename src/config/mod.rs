//! Configuration management module
//!
//! Handles loading configuration from multiple sources with proper precedence:
//! CLI arguments > environment variables > TOML files > defaults
//!
//! The remote-mode variables (`FLE_SERVER_HOST`, `FLE_RCON_PORT`) are not part
//! of this layered configuration; they are a separate mode-selection surface
//! handled in `discovery::mode`.

use crate::error::ConfigError;

pub mod cli;
pub mod env;
pub mod toml;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Name prefix used to filter game-server containers
    pub container_name_prefix: String,
    /// Host address reported for locally discovered containers
    pub published_host: String,
    pub log_level: String,
    pub docker_socket: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            container_name_prefix: "factorio_".to_string(),
            published_host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            docker_socket: "/var/run/docker.sock".to_string(),
        }
    }
}

/// Load configuration with full precedence chain
pub fn load_configuration(cli_args: &cli::CliArgs) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Some(ref path) = cli_args.config {
        let toml_config = toml::load_toml_config(path)?;
        config = toml::apply_toml_config(config, toml_config);
    }

    config = env::apply_env_config(config)?;
    config = cli_args.apply_to_config(config)?;

    Ok(config)
}
