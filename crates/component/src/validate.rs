//! Provider-type-aware component validation.
//!
//! Validation runs on every create and every full update, never on read or
//! delete. The schema comes from the provider registry; an unknown provider
//! type is itself a validation failure.

use crate::component::Component;
use crate::error::ValidationError;
use crate::provider::{FieldKind, ProviderRegistry, ProviderSchema};

/// Validates a component against its provider type's schema.
///
/// Checks, in order: the provider type is registered, no config key is
/// empty, required fields are present with a non-blank value, every
/// non-blank value coerces to the field's declared kind, and all
/// schema-declared cross-field checks pass.
///
/// # Errors
///
/// The first failing check is returned as a [`ValidationError`] carrying a
/// message key and typed parameters for localized formatting.
pub fn validate(
    component: &Component,
    registry: &ProviderRegistry,
) -> Result<(), ValidationError> {
    let schema = registry.lookup(&component.provider_type).ok_or_else(|| {
        ValidationError::new("invalidProviderTypeMessage")
            .with_literal_param(&component.provider_type)
    })?;

    if component.config.keys().any(str::is_empty) {
        return Err(ValidationError::new("emptyConfigKeyMessage"));
    }

    validate_fields(component, &schema)?;

    for check in schema.checks() {
        check(&component.config)?;
    }

    Ok(())
}

/// Checks required fields and per-field type coercion.
fn validate_fields(
    component: &Component,
    schema: &ProviderSchema,
) -> Result<(), ValidationError> {
    for field in schema.fields() {
        let values = component.config.get(&field.name);
        let present = values
            .map(|v| v.iter().any(|s| !s.trim().is_empty()))
            .unwrap_or(false);

        if field.required && !present {
            return Err(ValidationError::new("missingConfigFieldMessage")
                .with_key_param(&field.label));
        }

        let Some(values) = values else { continue };
        for value in values.iter().filter(|v| !v.trim().is_empty()) {
            match field.kind {
                FieldKind::Text => {}
                FieldKind::Number => {
                    if value.trim().parse::<i64>().is_err() {
                        return Err(ValidationError::new("invalidNumberFieldMessage")
                            .with_key_param(&field.label)
                            .with_literal_param(value));
                    }
                }
                FieldKind::Boolean => {
                    if value.trim() != "true" && value.trim() != "false" {
                        return Err(ValidationError::new("invalidBooleanFieldMessage")
                            .with_key_param(&field.label)
                            .with_literal_param(value));
                    }
                }
            }
        }
    }
    Ok(())
}
