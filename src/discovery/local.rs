//! Local endpoint discovery via the Docker runtime

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::discovery::{DiscoveryResult, Endpoint};
use crate::docker::{ContainerRuntime, PortMap};
use crate::error::DiscoveryError;

/// Discover endpoints of running game-server containers.
///
/// Lists containers matching the configured name prefix, then inspects each
/// one for published port bindings. Exactly one endpoint is produced per
/// container, in list order, carrying the configured host address plus the
/// first published UDP and TCP host ports (either may be absent).
///
/// An empty listing is not an error: a diagnostic is emitted and the result
/// is empty. Runtime failures and malformed port bindings propagate as typed
/// errors.
pub async fn discover_local<R: ContainerRuntime>(
    runtime: &R,
    config: &AppConfig,
) -> Result<DiscoveryResult, DiscoveryError> {
    let container_ids = runtime
        .list_server_containers(&config.container_name_prefix)
        .await?;

    // Normalize blank identifiers away before deciding the listing is empty
    let container_ids: Vec<String> = container_ids
        .into_iter()
        .filter(|id| !id.trim().is_empty())
        .collect();

    if container_ids.is_empty() {
        info!(
            "No running containers found matching prefix '{}'",
            config.container_name_prefix
        );
        return Ok(DiscoveryResult::empty());
    }

    let mut endpoints = Vec::with_capacity(container_ids.len());
    for container_id in &container_ids {
        let port_map = runtime.container_port_map(container_id).await?;

        let game_port = first_host_port(&port_map, "udp", container_id)?;
        let rcon_port = first_host_port(&port_map, "tcp", container_id)?;

        debug!(
            "Container {}: game_port={:?} rcon_port={:?}",
            container_id, game_port, rcon_port
        );

        endpoints.push(Endpoint {
            host: config.published_host.clone(),
            game_port,
            rcon_port,
        });
    }

    Ok(DiscoveryResult::from_endpoints(endpoints))
}

/// First published host port for the given protocol, taken from the lowest
/// container-port entry that has at least one binding.
fn first_host_port(
    port_map: &PortMap,
    protocol: &str,
    container_id: &str,
) -> Result<Option<u16>, DiscoveryError> {
    let suffix = format!("/{}", protocol);

    for (key, bindings) in port_map {
        if !key.ends_with(&suffix) {
            continue;
        }
        let Some(binding) = bindings.first() else {
            continue;
        };

        let port = binding.host_port.parse::<u16>().map_err(|_| {
            DiscoveryError::MalformedPortBinding {
                container_id: container_id.to_string(),
                value: binding.host_port.clone(),
            }
        })?;
        return Ok(Some(port));
    }

    Ok(None)
}
