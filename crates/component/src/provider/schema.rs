//! Per-provider-type configuration schema.

use std::fmt;

use crate::component::ComponentConfig;
use crate::error::ValidationError;

/// The declared kind of a configuration field, used for type coercion checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text, no coercion.
    Text,
    /// Must parse as a signed 64-bit integer.
    Number,
    /// Must be the literal string `true` or `false`.
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// A single declared configuration field of a provider type.
#[derive(Debug, Clone)]
pub struct ConfigField {
    /// Configuration key.
    pub name: String,
    /// Message key for the field's display name, resolved through the
    /// message catalog when the field appears in a validation error.
    pub label: String,
    /// Coercion rule applied to every non-blank value.
    pub kind: FieldKind,
    /// Whether the field must be present with a non-blank value.
    pub required: bool,
    /// Whether values are secret and must be redacted before display/audit.
    pub secret: bool,
}

impl ConfigField {
    /// Creates an optional, non-secret field.
    ///
    /// The label message key defaults to `<name>Label`.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        let label = format!("{name}Label");
        Self {
            name,
            label,
            kind,
            required: false,
            secret: false,
        }
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as secret.
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Overrides the label message key.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A cross-field constraint declared by a provider type.
pub type ConfigCheck =
    Box<dyn Fn(&ComponentConfig) -> Result<(), ValidationError> + Send + Sync>;

/// The validation and secret-field schema of one provider type.
///
/// Built once at startup (or in tests) and handed to the
/// [`ProviderRegistry`](super::ProviderRegistry).
pub struct ProviderSchema {
    provider_type: String,
    fields: Vec<ConfigField>,
    checks: Vec<ConfigCheck>,
}

impl fmt::Debug for ProviderSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSchema")
            .field("provider_type", &self.provider_type)
            .field("fields", &self.fields)
            .field("checks", &self.checks.len())
            .finish()
    }
}

impl ProviderSchema {
    /// Creates an empty schema for the given provider type.
    pub fn new(provider_type: impl Into<String>) -> Self {
        Self {
            provider_type: provider_type.into(),
            fields: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Declares a configuration field.
    pub fn field(mut self, field: ConfigField) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares a cross-field constraint.
    pub fn check(
        mut self,
        check: impl Fn(&ComponentConfig) -> Result<(), ValidationError> + Send + Sync + 'static,
    ) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// The provider type this schema applies to.
    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> &[ConfigField] {
        &self.fields
    }

    /// Declared cross-field checks.
    pub fn checks(&self) -> &[ConfigCheck] {
        &self.checks
    }

    /// Looks up a declared field by configuration key.
    pub fn field_by_name(&self, name: &str) -> Option<&ConfigField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of all fields declared secret.
    pub fn secret_field_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.secret)
            .map(|f| f.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_defaults() {
        let field = ConfigField::new("priority", FieldKind::Number);
        assert_eq!(field.name, "priority");
        assert_eq!(field.label, "priorityLabel");
        assert!(!field.required);
        assert!(!field.secret);
    }

    #[test]
    fn test_field_builder() {
        let field = ConfigField::new("bindCredential", FieldKind::Text)
            .required()
            .secret()
            .with_label("bindCredentialLabel");
        assert!(field.required);
        assert!(field.secret);
        assert_eq!(field.label, "bindCredentialLabel");
    }

    #[test]
    fn test_secret_field_names() {
        let schema = ProviderSchema::new("user-federation")
            .field(ConfigField::new("connectionUrl", FieldKind::Text))
            .field(ConfigField::new("bindCredential", FieldKind::Text).secret());
        let secrets: Vec<_> = schema.secret_field_names().collect();
        assert_eq!(secrets, vec!["bindCredential"]);
    }

    #[test]
    fn test_checks_run_against_config() {
        let schema = ProviderSchema::new("test").check(|config| {
            if config.contains_key("forbidden") {
                Err(ValidationError::new("forbiddenKeyMessage"))
            } else {
                Ok(())
            }
        });

        let mut config = ComponentConfig::new();
        assert!(schema.checks()[0](&config).is_ok());

        config.put_single("forbidden", "x");
        assert!(schema.checks()[0](&config).is_err());
    }
}
