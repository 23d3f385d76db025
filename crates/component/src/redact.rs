//! Secret redaction for audit-safe representations.
//!
//! Redaction replaces every value of a secret-declared config key with a
//! fixed placeholder. Keys are preserved so consumers know the field exists.
//! The internal stored copy is never redacted.

use crate::component::{Component, ComponentConfig};
use crate::provider::{ProviderRegistry, ProviderSchema};

/// The fixed placeholder written in place of secret values.
pub const SECRET_PLACEHOLDER: &str = "**********";

/// Produces an audit-safe copy of a component.
///
/// Idempotent: redacting an already-redacted component yields the same
/// result. A component whose provider type has no registered schema is
/// returned unchanged (writes of such components are rejected by validation,
/// so nothing secret can have been stored).
pub fn redact(component: &Component, registry: &ProviderRegistry) -> Component {
    let mut redacted = component.clone();
    redacted.config = redact_config(
        &component.config,
        registry.lookup(&component.provider_type).as_deref(),
    );
    redacted
}

/// Redacts secret keys of a configuration map against a schema.
pub(crate) fn redact_config(
    config: &ComponentConfig,
    schema: Option<&ProviderSchema>,
) -> ComponentConfig {
    let Some(schema) = schema else {
        return config.clone();
    };
    let mut redacted = config.clone();
    for key in schema.secret_field_names() {
        if let Some(values) = config.get(key) {
            redacted.put(key, vec![SECRET_PLACEHOLDER.to_string(); values.len()]);
        }
    }
    redacted
}
