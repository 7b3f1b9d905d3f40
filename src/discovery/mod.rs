//! Game-server endpoint discovery
//!
//! A short pipeline: mode selection routes exclusively to either the remote
//! resolver or the local Docker discoverer, both of which produce the same
//! [`DiscoveryResult`] shape.

use crate::config::AppConfig;
use crate::docker::ContainerRuntime;
use crate::error::DiscoveryError;

pub mod local;
pub mod mode;
pub mod remote;

pub use mode::{select_mode, DiscoveryMode};

/// One resolved game-server instance.
///
/// Ports are optional: a container may publish only one of the two protocols,
/// in which case the missing side stays `None` rather than breaking the
/// per-instance record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    /// UDP gameplay port
    pub game_port: Option<u16>,
    /// TCP RCON port
    pub rcon_port: Option<u16>,
}

/// Ordered collection of discovered endpoints, one record per instance.
///
/// Records keep discovery order, so host and ports at one index always
/// describe the same instance. The `game_ports`/`rcon_ports` accessors
/// reproduce the historical presentation: each list sorted ascending and
/// containing only the ports that were actually published, so their lengths
/// may differ from the host count when coverage is partial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryResult {
    endpoints: Vec<Endpoint>,
}

impl DiscoveryResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_endpoints(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Host addresses in discovery order
    pub fn hosts(&self) -> Vec<String> {
        self.endpoints.iter().map(|e| e.host.clone()).collect()
    }

    /// Published UDP game ports, sorted ascending
    pub fn game_ports(&self) -> Vec<u16> {
        let mut ports: Vec<u16> = self.endpoints.iter().filter_map(|e| e.game_port).collect();
        ports.sort_unstable();
        ports
    }

    /// Published TCP RCON ports, sorted ascending
    pub fn rcon_ports(&self) -> Vec<u16> {
        let mut ports: Vec<u16> = self.endpoints.iter().filter_map(|e| e.rcon_port).collect();
        ports.sort_unstable();
        ports
    }
}

/// Run discovery in the given mode.
///
/// Exactly one resolver runs; the runtime is only consulted on the local
/// path. Remote resolution cannot fail, so its arm is always `Ok`.
pub async fn discover<R: ContainerRuntime>(
    mode: DiscoveryMode,
    runtime: &R,
    config: &AppConfig,
) -> Result<DiscoveryResult, DiscoveryError> {
    match mode {
        DiscoveryMode::Remote { host, rcon_port } => {
            Ok(remote::resolve_remote(&host, &rcon_port))
        }
        DiscoveryMode::Local => local::discover_local(runtime, config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::local::tests::{port_map, FixtureRuntime};
    use super::*;
    use crate::discovery::mode::select_mode_from;

    fn endpoint(host: &str, game_port: Option<u16>, rcon_port: Option<u16>) -> Endpoint {
        Endpoint {
            host: host.to_string(),
            game_port,
            rcon_port,
        }
    }

    #[test]
    fn test_result_accessors_sorted_independently() {
        let result = DiscoveryResult::from_endpoints(vec![
            endpoint("127.0.0.1", Some(34198), Some(27016)),
            endpoint("127.0.0.1", Some(34197), Some(27015)),
        ]);

        assert_eq!(result.len(), 2);
        assert_eq!(result.hosts(), vec!["127.0.0.1", "127.0.0.1"]);
        assert_eq!(result.game_ports(), vec![34197, 34198]);
        assert_eq!(result.rcon_ports(), vec![27015, 27016]);
        // Records keep discovery order regardless of accessor sorting
        assert_eq!(result.endpoints()[0].game_port, Some(34198));
    }

    #[test]
    fn test_empty_result() {
        let result = DiscoveryResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.hosts().len(), 0);
        assert_eq!(result.game_ports().len(), 0);
        assert_eq!(result.rcon_ports().len(), 0);
    }

    #[tokio::test]
    async fn test_partial_remote_config_routes_to_local() {
        // Only the host variable is set: local discovery must run instead of
        // remote resolution.
        let mode = select_mode_from(Some("factorio.example.com".to_string()), None);
        assert_eq!(mode, DiscoveryMode::Local);

        let runtime = FixtureRuntime::new(vec![(
            "abc123".to_string(),
            port_map(&[("34197/udp", &["34197"]), ("27015/tcp", &["27015"])]),
        )]);

        let result = discover(mode, &runtime, &AppConfig::default())
            .await
            .unwrap();

        // The fixture container shows up, proving the local path was taken
        assert_eq!(result.hosts(), vec!["127.0.0.1"]);
        assert_eq!(result.game_ports(), vec![34197]);
        assert_eq!(result.rcon_ports(), vec![27015]);
    }

    #[tokio::test]
    async fn test_remote_mode_ignores_runtime() {
        let mode = select_mode_from(
            Some("factorio.example.com".to_string()),
            Some("27015".to_string()),
        );

        // An empty fixture: if the local path ran it would return no results
        let runtime = FixtureRuntime::new(vec![]);
        let result = discover(mode, &runtime, &AppConfig::default())
            .await
            .unwrap();

        assert_eq!(result.hosts(), vec!["factorio.example.com"]);
        assert_eq!(result.rcon_ports(), vec![27015]);
        assert_eq!(result.game_ports(), vec![34212]);
    }
}
