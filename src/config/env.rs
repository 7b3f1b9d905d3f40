//! Environment variable configuration handling

use crate::config::AppConfig;
use crate::error::ConfigError;
use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "FACTORIO_CLUSTER_DISCOVERY_";

/// Apply environment variable configuration over base configuration
pub fn apply_env_config(mut base_config: AppConfig) -> Result<AppConfig, ConfigError> {
    if let Ok(prefix) = env::var(format!("{}NAME_PREFIX", ENV_PREFIX)) {
        base_config.container_name_prefix = prefix;
    }

    if let Ok(host) = env::var(format!("{}PUBLISHED_HOST", ENV_PREFIX)) {
        base_config.published_host = host;
    }

    if let Ok(level) = env::var(format!("{}LOG_LEVEL", ENV_PREFIX)) {
        base_config.log_level = level;
    }

    if let Ok(socket) = env::var(format!("{}DOCKER_SOCKET", ENV_PREFIX)) {
        base_config.docker_socket = socket;
    }

    Ok(base_config)
}
