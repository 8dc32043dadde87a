//! Gradebook HTTP API Server
//!
//! This crate provides an HTTP API over the gradebook-core evaluator and
//! record store.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

use server::{ServerConfig, start_server};
use tracing_subscriber::EnvFilter;

/// Start the gradebook HTTP server with the default configuration
pub async fn start() -> anyhow::Result<()> {
    start_with_config(ServerConfig::default(), "info").await
}

/// Start the gradebook HTTP server with a custom configuration
///
/// `log_level` is used unless `RUST_LOG` is set.
pub async fn start_with_config(config: ServerConfig, log_level: &str) -> anyhow::Result<()> {
    init_tracing(log_level);
    start_server(config).await
}

/// Install the global fmt subscriber; later calls are no-ops
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
