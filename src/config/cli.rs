//! Command-line argument parsing

use crate::config::AppConfig;
use crate::error::ConfigError;
use clap::Parser;

/// Command-line arguments structure
#[derive(Parser, Debug)]
#[command(name = "factorio-cluster-discovery")]
#[command(about = "Endpoint discovery for running Factorio server containers")]
#[command(version)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, help = "Set the logging level")]
    pub log_level: Option<String>,

    /// Docker socket path
    #[arg(long, help = "Path to Docker socket")]
    pub docker_socket: Option<String>,

    /// Container name prefix filter
    #[arg(long, help = "Name prefix used to filter game-server containers")]
    pub name_prefix: Option<String>,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in TOML format and exit")]
    pub print_default_config: bool,
}

impl CliArgs {
    /// Apply CLI arguments over base configuration
    pub fn apply_to_config(&self, mut base_config: AppConfig) -> Result<AppConfig, ConfigError> {
        if let Some(ref level) = self.log_level {
            base_config.log_level = level.clone();
        }

        if let Some(ref socket) = self.docker_socket {
            base_config.docker_socket = socket.clone();
        }

        if let Some(ref prefix) = self.name_prefix {
            base_config.container_name_prefix = prefix.clone();
        }

        Ok(base_config)
    }
}

/// Print default configuration in TOML format
pub fn print_default_config() {
    let default_config = AppConfig::default();

    println!("# Factorio Cluster Discovery Configuration");
    println!("# This is the default configuration with all available options");
    println!();
    println!("# Name prefix used to filter game-server containers");
    println!(
        "container_name_prefix = \"{}\"",
        default_config.container_name_prefix
    );
    println!();
    println!("# Host address reported for locally discovered containers");
    println!("published_host = \"{}\"", default_config.published_host);
    println!();
    println!("[logging]");
    println!("# Log level: trace, debug, info, warn, error");
    println!("level = \"{}\"", default_config.log_level);
    println!();
    println!("[docker]");
    println!("# Path to Docker socket");
    println!("socket = \"{}\"", default_config.docker_socket);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from([
            "factorio-cluster-discovery",
            "--config",
            "/etc/factorio-cluster-discovery.toml",
            "--log-level",
            "debug",
            "--docker-socket",
            "/custom/docker.sock",
            "--name-prefix",
            "game_",
        ])
        .unwrap();

        assert_eq!(
            args.config,
            Some("/etc/factorio-cluster-discovery.toml".to_string())
        );
        assert_eq!(args.log_level, Some("debug".to_string()));
        assert_eq!(args.docker_socket, Some("/custom/docker.sock".to_string()));
        assert_eq!(args.name_prefix, Some("game_".to_string()));
        assert!(!args.print_default_config);
    }

    #[test]
    fn test_cli_args_minimal() {
        let args = CliArgs::try_parse_from(["factorio-cluster-discovery"]).unwrap();

        assert_eq!(args.config, None);
        assert_eq!(args.log_level, None);
        assert_eq!(args.docker_socket, None);
        assert_eq!(args.name_prefix, None);
        assert!(!args.print_default_config);
    }

    #[test]
    fn test_apply_cli_to_config() {
        let args = CliArgs {
            config: None,
            log_level: Some("trace".to_string()),
            docker_socket: Some("/test/docker.sock".to_string()),
            name_prefix: Some("test_".to_string()),
            print_default_config: false,
        };

        let config = args.apply_to_config(AppConfig::default()).unwrap();

        assert_eq!(config.log_level, "trace");
        assert_eq!(config.docker_socket, "/test/docker.sock");
        assert_eq!(config.container_name_prefix, "test_");
    }

    #[test]
    fn test_apply_cli_to_config_no_overrides() {
        let args = CliArgs {
            config: None,
            log_level: None,
            docker_socket: None,
            name_prefix: None,
            print_default_config: false,
        };

        let config = args.apply_to_config(AppConfig::default()).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
