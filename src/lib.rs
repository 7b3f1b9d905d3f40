//! Factorio Cluster Discovery - Endpoint resolution for running game-server containers
//!
//! This library resolves the network endpoints of one or more running Factorio
//! server instances, either by inspecting the local Docker runtime or from
//! externally supplied connection parameters.

pub mod config;
pub mod discovery;
pub mod docker;
pub mod error;

pub use error::AppError;
