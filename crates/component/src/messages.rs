//! Localized message catalog for validation errors.
//!
//! Templates use `{0}`-style positional placeholders. Parameters that are
//! message keys are resolved through the catalog before insertion; literal
//! parameters are inserted verbatim. Unknown keys fall back to the key text
//! itself, unknown locales fall back to `en`.

use std::collections::HashMap;

use crate::error::{MessageParam, ValidationError};

/// The fallback locale.
pub const DEFAULT_LOCALE: &str = "en";

/// A locale → message key → template catalog.
///
/// # Examples
///
/// ```
/// use ironveil_component::error::ValidationError;
/// use ironveil_component::messages::MessageCatalog;
///
/// let catalog = MessageCatalog::embedded();
/// let err = ValidationError::new("missingConfigFieldMessage")
///     .with_key_param("connectionUrlLabel");
/// assert_eq!(catalog.format("en", &err), "Connection URL is required");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locales: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the catalog shipped with the server (locale `en`).
    pub fn embedded() -> Self {
        let mut catalog = Self::new();
        for (key, template) in EMBEDDED_EN {
            catalog.insert(DEFAULT_LOCALE, *key, *template);
        }
        catalog
    }

    /// Inserts a template for a locale and message key.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Formats a validation error for the given locale.
    ///
    /// Key parameters get their own catalog lookup; literal parameters are
    /// inserted verbatim. Each key falls back to the `en` catalog, then to
    /// the raw key text.
    pub fn format(&self, locale: &str, error: &ValidationError) -> String {
        let template = self
            .resolve(locale, &error.message_key)
            .unwrap_or(&error.message_key);

        let params: Vec<String> = error
            .parameters
            .iter()
            .map(|param| match param {
                MessageParam::Key(key) => self
                    .resolve(locale, key)
                    .cloned()
                    .unwrap_or_else(|| key.clone()),
                MessageParam::Literal(value) => value.clone(),
            })
            .collect();

        format_template(template, &params)
    }

    fn resolve(&self, locale: &str, key: &str) -> Option<&String> {
        self.locales
            .get(locale)
            .and_then(|m| m.get(key))
            .or_else(|| self.locales.get(DEFAULT_LOCALE).and_then(|m| m.get(key)))
    }
}

/// Substitutes `{n}` placeholders with positional parameters.
///
/// Placeholders without a matching parameter are left as-is.
fn format_template(template: &str, params: &[String]) -> String {
    let mut result = template.to_string();
    for (index, param) in params.iter().enumerate() {
        result = result.replace(&format!("{{{index}}}"), param);
    }
    result
}

/// Message templates for the `en` locale.
const EMBEDDED_EN: &[(&str, &str)] = &[
    ("invalidProviderTypeMessage", "Provider type {0} is not registered"),
    ("emptyConfigKeyMessage", "Configuration keys must not be empty"),
    ("missingConfigFieldMessage", "{0} is required"),
    ("invalidNumberFieldMessage", "{0} must be a number, got {1}"),
    ("invalidBooleanFieldMessage", "{0} must be true or false, got {1}"),
    ("bindCredentialRequiredMessage", "{0} is required when {1} is set"),
    // Field labels
    ("connectionUrlLabel", "Connection URL"),
    ("bindDnLabel", "Bind DN"),
    ("bindCredentialLabel", "Bind credential"),
    ("searchBaseLabel", "Search base"),
    ("priorityLabel", "Priority"),
    ("enabledLabel", "Enabled"),
    ("privateKeyLabel", "Private key"),
    ("algorithmLabel", "Algorithm"),
    ("keySizeLabel", "Key size"),
];
