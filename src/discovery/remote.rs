//! Remote endpoint resolution
//!
//! Trusts externally supplied connection parameters and derives the UDP game
//! port from the TCP RCON port. Factorio images publish both ports from fixed
//! bases, so the offset between them is a protocol constant.

use tracing::warn;

use crate::discovery::mode::RCON_PORT_ENV;
use crate::discovery::{DiscoveryResult, Endpoint};

/// Base RCON port of the server numbering scheme
pub const RCON_PORT_BASE: u16 = 27000;

/// Base game port of the server numbering scheme
pub const GAME_PORT_BASE: u16 = 34197;

/// Resolve a single remote endpoint from host and RCON port.
///
/// A malformed port value soft-fails: a diagnostic is emitted and the result
/// is empty. This is deliberate; it never falls back to local discovery and
/// never surfaces as an error.
pub fn resolve_remote(host: &str, rcon_port: &str) -> DiscoveryResult {
    let rcon_port: u16 = match rcon_port.parse() {
        Ok(port) => port,
        Err(_) => {
            warn!("Invalid {}: {}", RCON_PORT_ENV, rcon_port);
            return DiscoveryResult::empty();
        }
    };

    let Some(game_port) = derive_game_port(rcon_port) else {
        warn!(
            "Derived game port out of range for {} {}",
            RCON_PORT_ENV, rcon_port
        );
        return DiscoveryResult::empty();
    };

    DiscoveryResult::from_endpoints(vec![Endpoint {
        host: host.to_string(),
        game_port: Some(game_port),
        rcon_port: Some(rcon_port),
    }])
}

/// game port = rcon port - 27000 + 34197
fn derive_game_port(rcon_port: u16) -> Option<u16> {
    let port = i32::from(rcon_port) - i32::from(RCON_PORT_BASE) + i32::from(GAME_PORT_BASE);
    u16::try_from(port).ok()
}
