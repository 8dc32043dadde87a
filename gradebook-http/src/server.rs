use anyhow::Context;
use gradebook_core::{Gradebook, config::StoreConfig, store::InMemoryStore};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::Path};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_api_router;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Record store backing the gradebook
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load a JSON configuration file; missing fields take their defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub gradebook: Gradebook,
}

impl AppState {
    pub fn new(gradebook: Gradebook) -> Self {
        Self { gradebook }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Gradebook::new(InMemoryStore::new()))
    }
}

/// Start the HTTP server and run until Ctrl+C or SIGTERM
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let store = config
        .store
        .build()
        .await
        .context("Failed to initialize record store")?;
    let state = AppState::new(Gradebook::from_shared(store));

    info!("Initialized record store");

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.socket_addr()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
