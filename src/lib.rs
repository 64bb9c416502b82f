pub mod blacklist;
pub mod cli;
pub mod config;
pub mod config_api;
pub mod ct_log;
pub mod error;
pub mod sync;
pub mod telemetry;

/// User agent sent by the HTTP clients
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
