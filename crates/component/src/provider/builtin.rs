//! Built-in provider-type schemas.
//!
//! These cover the provider categories the server ships with. Deployments
//! extending the platform register additional schemas at startup.

use super::schema::{ConfigField, FieldKind, ProviderSchema};
use crate::error::ValidationError;

/// Returns the schemas registered by [`ProviderRegistry::builtin`](super::ProviderRegistry::builtin).
pub(super) fn builtin_schemas() -> Vec<ProviderSchema> {
    vec![user_federation(), key_provider()]
}

/// Federation connectors (LDAP and the like).
fn user_federation() -> ProviderSchema {
    ProviderSchema::new("user-federation")
        .field(ConfigField::new("connectionUrl", FieldKind::Text).required())
        .field(ConfigField::new("bindDn", FieldKind::Text))
        .field(ConfigField::new("bindCredential", FieldKind::Text).secret())
        .field(ConfigField::new("searchBase", FieldKind::Text))
        .field(ConfigField::new("priority", FieldKind::Number))
        .field(ConfigField::new("enabled", FieldKind::Boolean))
        // A bind DN without a credential cannot authenticate.
        .check(|config| {
            let has_bind_dn = config
                .first("bindDn")
                .is_some_and(|v| !v.trim().is_empty());
            let has_credential = config
                .first("bindCredential")
                .is_some_and(|v| !v.trim().is_empty());
            if has_bind_dn && !has_credential {
                Err(ValidationError::new("bindCredentialRequiredMessage")
                    .with_key_param("bindCredentialLabel")
                    .with_key_param("bindDnLabel"))
            } else {
                Ok(())
            }
        })
}

/// Realm signing/encryption key providers.
fn key_provider() -> ProviderSchema {
    ProviderSchema::new("key-provider")
        .field(ConfigField::new("privateKey", FieldKind::Text).required().secret())
        .field(ConfigField::new("algorithm", FieldKind::Text))
        .field(ConfigField::new("keySize", FieldKind::Number))
        .field(ConfigField::new("priority", FieldKind::Number))
        .field(ConfigField::new("enabled", FieldKind::Boolean))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentConfig;

    #[test]
    fn test_user_federation_bind_check() {
        let schema = user_federation();
        let check = &schema.checks()[0];

        let mut config = ComponentConfig::new();
        config.put_single("bindDn", "cn=admin");
        let err = check(&config).unwrap_err();
        assert_eq!(err.message_key, "bindCredentialRequiredMessage");

        config.put_single("bindCredential", "secret");
        assert!(check(&config).is_ok());
    }

    #[test]
    fn test_key_provider_secrets() {
        let schema = key_provider();
        let secrets: Vec<_> = schema.secret_field_names().collect();
        assert_eq!(secrets, vec!["privateKey"]);
    }
}
