//! In-memory registry of provider-type schemas.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::schema::ProviderSchema;

/// Process-wide registry mapping provider type to its schema bundle.
///
/// The registry is long-lived and supports concurrent readers and writers.
/// Registering a schema for an already-known provider type replaces the
/// previous one.
///
/// # Examples
///
/// ```
/// use ironveil_component::provider::{ConfigField, FieldKind, ProviderRegistry, ProviderSchema};
///
/// let registry = ProviderRegistry::new();
/// registry.register(
///     ProviderSchema::new("key-provider")
///         .field(ConfigField::new("privateKey", FieldKind::Text).required().secret()),
/// );
/// assert!(registry.lookup("key-provider").is_some());
/// assert!(registry.lookup("unknown").is_none());
/// ```
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    schemas: RwLock<HashMap<String, Arc<ProviderSchema>>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the built-in provider schemas.
    pub fn builtin() -> Self {
        let registry = Self::new();
        for schema in super::builtin::builtin_schemas() {
            registry.register(schema);
        }
        registry
    }

    /// Registers (or replaces) a provider-type schema.
    pub fn register(&self, schema: ProviderSchema) {
        self.schemas
            .write()
            .insert(schema.provider_type().to_string(), Arc::new(schema));
    }

    /// Looks up the schema for a provider type.
    pub fn lookup(&self, provider_type: &str) -> Option<Arc<ProviderSchema>> {
        self.schemas.read().get(provider_type).cloned()
    }

    /// Returns all registered provider types, sorted.
    pub fn provider_types(&self) -> Vec<String> {
        let mut types: Vec<_> = self.schemas.read().keys().cloned().collect();
        types.sort();
        types
    }

    /// Number of registered provider types.
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Returns `true` if no provider types are registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }
}
