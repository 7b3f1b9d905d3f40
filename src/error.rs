//! Centralized error types and handling

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Docker API error: {0}")]
    Docker(#[from] DockerError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Docker-related errors
#[derive(Debug, Error)]
pub enum DockerError {
    #[error("Failed to connect to Docker daemon: {0}")]
    ConnectionFailed(String),

    #[error("Docker API error: {0}")]
    ApiError(String),
}

/// Endpoint discovery errors
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Container runtime error: {0}")]
    Runtime(#[from] DockerError),

    #[error("Malformed host port '{value}' published by container {container_id}")]
    MalformedPortBinding { container_id: String, value: String },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),
}
