//! Route configuration for the admin API.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use ironveil_component::store::ComponentStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all admin API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
///
/// ## Realm-level
/// - `GET /admin/realms/{realm}/components` - List components
/// - `POST /admin/realms/{realm}/components` - Create component
/// - `GET /admin/realms/{realm}/components/{id}` - Get component
/// - `PUT /admin/realms/{realm}/components/{id}` - Replace component
/// - `DELETE /admin/realms/{realm}/components/{id}` - Remove component
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: ComponentStore + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler))
        .route("/_liveness", get(handlers::liveness_handler))
        // Realm-level routes
        .route(
            "/admin/realms/{realm}/components",
            get(handlers::list_components_handler::<S>),
        )
        .route(
            "/admin/realms/{realm}/components",
            post(handlers::create_component_handler::<S>),
        )
        .route(
            "/admin/realms/{realm}/components/{id}",
            get(handlers::get_component_handler::<S>),
        )
        .route(
            "/admin/realms/{realm}/components/{id}",
            put(handlers::update_component_handler::<S>),
        )
        .route(
            "/admin/realms/{realm}/components/{id}",
            delete(handlers::delete_component_handler::<S>),
        )
        // State
        .with_state(state)
}
