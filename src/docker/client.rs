//! Bollard-backed container runtime adapter

use std::collections::HashMap;

use bollard::query_parameters::{InspectContainerOptions, ListContainersOptions};
use bollard::Docker;
use tracing::debug;

use crate::docker::{ContainerRuntime, HostBinding, PortMap};
use crate::error::DockerError;

/// Container runtime client backed by the Docker daemon
pub struct BollardRuntime {
    docker: Docker,
}

impl BollardRuntime {
    /// Create a new runtime client with the default socket connection
    pub fn new() -> Result<Self, DockerError> {
        let docker = Docker::connect_with_socket_defaults()
            .map_err(|e| DockerError::ConnectionFailed(e.to_string()))?;
        Ok(Self { docker })
    }

    /// Create a new runtime client with a custom socket path
    pub fn with_socket(socket_path: &str) -> Result<Self, DockerError> {
        let docker = Docker::connect_with_socket(socket_path, 120, bollard::API_DEFAULT_VERSION)
            .map_err(|e| {
                DockerError::ConnectionFailed(format!(
                    "Failed to connect to Docker socket {}: {}",
                    socket_path, e
                ))
            })?;
        Ok(Self { docker })
    }
}

impl ContainerRuntime for BollardRuntime {
    async fn list_server_containers(
        &self,
        name_prefix: &str,
    ) -> Result<Vec<String>, DockerError> {
        let mut filters = HashMap::new();
        filters.insert("name".to_string(), vec![name_prefix.to_string()]);

        let options = ListContainersOptions {
            all: false,
            limit: None,
            size: false,
            filters: Some(filters),
        };

        let summaries = self
            .docker
            .list_containers(Some(options))
            .await
            .map_err(|e| DockerError::ApiError(e.to_string()))?;

        debug!("Listed {} matching containers", summaries.len());

        Ok(summaries.into_iter().filter_map(|c| c.id).collect())
    }

    async fn container_port_map(&self, container_id: &str) -> Result<PortMap, DockerError> {
        let response = self
            .docker
            .inspect_container(container_id, None::<InspectContainerOptions>)
            .await
            .map_err(|e| DockerError::ApiError(e.to_string()))?;

        let ports = response
            .network_settings
            .and_then(|settings| settings.ports)
            .unwrap_or_default();

        let mut port_map = PortMap::new();
        for (key, bindings) in ports {
            let bindings = bindings
                .unwrap_or_default()
                .into_iter()
                .filter_map(|b| {
                    b.host_port.map(|host_port| HostBinding {
                        host_ip: b.host_ip,
                        host_port,
                    })
                })
                .collect();
            port_map.insert(key, bindings);
        }

        Ok(port_map)
    }
}
