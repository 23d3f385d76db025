//! Provider-type schemas and their registry.
//!
//! Components stay uniform at the entity level; everything provider-specific
//! (required fields, field kinds, secret fields, cross-field checks) is
//! dispatched through a registry mapping the provider type string to a small
//! capability bundle.

mod builtin;
mod registry;
mod schema;

pub use registry::ProviderRegistry;
pub use schema::{ConfigCheck, ConfigField, FieldKind, ProviderSchema};
