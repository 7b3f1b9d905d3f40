use clap::Parser;
use tracing::info;

use factorio_cluster_discovery::config::{self, cli::CliArgs};
use factorio_cluster_discovery::discovery::{self, DiscoveryMode};
use factorio_cluster_discovery::docker::BollardRuntime;
use factorio_cluster_discovery::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = CliArgs::parse();

    if cli.print_default_config {
        config::cli::print_default_config();
        return Ok(());
    }

    let config = config::load_configuration(&cli)?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .init();

    let result = match discovery::select_mode() {
        DiscoveryMode::Remote { host, rcon_port } => {
            info!("Using remote server configuration from environment");
            discovery::remote::resolve_remote(&host, &rcon_port)
        }
        DiscoveryMode::Local => {
            let runtime = BollardRuntime::with_socket(&config.docker_socket)?;
            discovery::local::discover_local(&runtime, &config).await?
        }
    };

    // Empty results are reported on stdout, not as a failure exit
    if result.is_empty() {
        println!("No local Factorio containers found.");
    } else {
        println!("Local Factorio container addresses:");
        for endpoint in result.endpoints() {
            println!("{}", endpoint.host);
        }
    }

    Ok(())
}
