//! IronVeil Identity Server
//!
//! Multi-tenant identity server exposing realm component administration.

use std::sync::Arc;

use clap::Parser;
use ironveil_component::audit::TracingAuditSink;
use ironveil_component::provider::ProviderRegistry;
use ironveil_component::service::ComponentService;
use ironveil_component::store::{ComponentStore, MemoryStore};
use ironveil_rest::{ServerConfig, create_app, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds the component service over a store and starts serving.
async fn start<S>(store: S, config: ServerConfig) -> anyhow::Result<()>
where
    S: ComponentStore + 'static,
{
    let service = ComponentService::new(
        Arc::new(store),
        Arc::new(ProviderRegistry::builtin()),
        Arc::new(TracingAuditSink::new()),
    );
    let app = create_app(Arc::new(service), config.clone());
    serve(app, &config).await
}

/// Starts the server with the SQLite store.
#[cfg(feature = "sqlite")]
async fn start_sqlite(db_path: String, config: ServerConfig) -> anyhow::Result<()> {
    use ironveil_component::store::SqliteStore;

    info!(database = %db_path, "Initializing SQLite store");
    let store = SqliteStore::open(&db_path)?;
    start(store, config).await
}

/// Fallback when the sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_db_path: String, _config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite store requires the 'sqlite' feature. \
         Build with: cargo build -p ironveil-server --features sqlite"
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting IronVeil Identity Server"
    );

    match config.database_url.clone() {
        Some(db_path) => start_sqlite(db_path, config).await?,
        None => {
            info!("No database configured, using in-memory store");
            start(MemoryStore::new(), config).await?;
        }
    }

    Ok(())
}
