//! Docker API integration module
//!
//! Defines the container-runtime abstraction consumed by endpoint discovery
//! and its bollard-backed implementation.

use std::collections::BTreeMap;

use crate::error::DockerError;

pub mod client;

pub use client::BollardRuntime;

/// One host-side binding of a published container port.
///
/// `host_port` stays a string, matching the Docker wire format; the discovery
/// layer is responsible for parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBinding {
    pub host_ip: Option<String>,
    pub host_port: String,
}

/// Published port bindings of a container, keyed `"<containerPort>/<protocol>"`
/// (protocol is `tcp` or `udp`). Ordered so iteration is deterministic.
pub type PortMap = BTreeMap<String, Vec<HostBinding>>;

/// Read-only view of the container runtime.
///
/// Two capabilities: list running game-server containers by name prefix, and
/// fetch the published port bindings of one container. Implemented by
/// [`BollardRuntime`] against a live daemon and by fixtures in tests.
pub trait ContainerRuntime {
    async fn list_server_containers(&self, name_prefix: &str)
        -> Result<Vec<String>, DockerError>;

    async fn container_port_map(&self, container_id: &str) -> Result<PortMap, DockerError>;
}
