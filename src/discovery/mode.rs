//! Discovery mode selection

use std::env;

/// Environment variable naming the remote server host
pub const SERVER_HOST_ENV: &str = "FLE_SERVER_HOST";

/// Environment variable naming the remote RCON port
pub const RCON_PORT_ENV: &str = "FLE_RCON_PORT";

/// Selected discovery mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryMode {
    /// Externally supplied connection parameters. The port is kept as the raw
    /// string; numeric validation happens in the remote resolver so a
    /// malformed value fails there, not here.
    Remote { host: String, rcon_port: String },
    /// Query the local Docker runtime
    Local,
}

/// Select the discovery mode from the process environment
pub fn select_mode() -> DiscoveryMode {
    select_mode_from(
        env::var(SERVER_HOST_ENV).ok(),
        env::var(RCON_PORT_ENV).ok(),
    )
}

/// Pure mode selection from explicit configuration values.
///
/// Remote mode requires both values present and non-empty; any other
/// combination falls back to local discovery.
pub fn select_mode_from(host: Option<String>, rcon_port: Option<String>) -> DiscoveryMode {
    match (host, rcon_port) {
        (Some(host), Some(rcon_port)) if !host.is_empty() && !rcon_port.is_empty() => {
            DiscoveryMode::Remote { host, rcon_port }
        }
        _ => DiscoveryMode::Local,
    }
}
