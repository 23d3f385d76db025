//! # ironveil-rest - Admin REST API
//!
//! This crate exposes the IronVeil Identity Server's realm component
//! administration over HTTP. It translates admin requests into calls on the
//! component core ([`ironveil_component`]), which owns capability gating,
//! provider-type validation, secret redaction, and audit emission.
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | list | GET | `/admin/realms/{realm}/components?parent=&type=` |
//! | create | POST | `/admin/realms/{realm}/components` |
//! | get | GET | `/admin/realms/{realm}/components/{id}` |
//! | update | PUT | `/admin/realms/{realm}/components/{id}` |
//! | delete | DELETE | `/admin/realms/{realm}/components/{id}` |
//! | health | GET | `/health` |
//!
//! ## HTTP Headers
//!
//! - `X-Admin-Roles` - Caller capabilities (`view`, `manage`, comma-separated)
//! - `Accept-Language` - Locale for validation error messages
//!
//! ## Error Handling
//!
//! Errors are returned as `{"errorMessage": "..."}` bodies with these status
//! codes:
//!
//! | HTTP Status | Meaning |
//! |-------------|---------|
//! | 400 | Validation failure or dangling parent reference |
//! | 403 | Missing view/manage capability |
//! | 404 | Component not found in the realm |
//! | 409 | Component still referenced as a parent |
//! | 500 | Store or audit failure |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use ironveil_component::audit::TracingAuditSink;
//! use ironveil_component::provider::ProviderRegistry;
//! use ironveil_component::service::ComponentService;
//! use ironveil_component::store::SqliteStore;
//! use ironveil_rest::{ServerConfig, create_app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SqliteStore::open("ironveil.db")?;
//!     let service = ComponentService::new(
//!         Arc::new(store),
//!         Arc::new(ProviderRegistry::builtin()),
//!         Arc::new(TracingAuditSink::new()),
//!     );
//!
//!     let config = ServerConfig::default();
//!     let app = create_app(Arc::new(service), config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (service, catalog, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for capabilities and locale
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use ironveil_component::messages::MessageCatalog;
use ironveil_component::service::ComponentService;
use ironveil_component::store::ComponentStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with the embedded message catalog.
///
/// For a custom catalog, use [`create_app_with_catalog`].
pub fn create_app<S>(service: Arc<ComponentService<S>>, config: ServerConfig) -> Router
where
    S: ComponentStore + 'static,
{
    create_app_with_catalog(service, Arc::new(MessageCatalog::embedded()), config)
}

/// Creates the Axum application with a custom message catalog.
///
/// This function sets up the complete admin API with all handlers,
/// middleware, and configuration.
pub fn create_app_with_catalog<S>(
    service: Arc<ComponentService<S>>,
    catalog: Arc<MessageCatalog>,
    config: ServerConfig,
) -> Router
where
    S: ComponentStore + 'static,
{
    info!(
        provider_types = ?service.registry().provider_types(),
        "Creating admin API server"
    );

    // Create application state
    let state = AppState::new(service, catalog, config.clone());

    // Build the router with all admin routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ironveil_rest={level},ironveil_component={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
