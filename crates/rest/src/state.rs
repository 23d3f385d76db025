//! Application state for the admin REST API.
//!
//! This module defines the shared application state available to all request
//! handlers: the component service, the message catalog, and the server
//! configuration.

use std::sync::Arc;

use ironveil_component::messages::MessageCatalog;
use ironveil_component::service::ComponentService;
use ironveil_component::store::ComponentStore;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The store backend type (must implement [`ComponentStore`])
pub struct AppState<S: ComponentStore> {
    /// The component service.
    service: Arc<ComponentService<S>>,

    /// Localized messages for validation failures.
    catalog: Arc<MessageCatalog>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since everything is behind an Arc
impl<S: ComponentStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            catalog: Arc::clone(&self.catalog),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: ComponentStore> AppState<S> {
    /// Creates a new AppState.
    pub fn new(
        service: Arc<ComponentService<S>>,
        catalog: Arc<MessageCatalog>,
        config: ServerConfig,
    ) -> Self {
        Self {
            service,
            catalog,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the component service.
    pub fn service(&self) -> &ComponentService<S> {
        &self.service
    }

    /// Returns a reference to the message catalog.
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
