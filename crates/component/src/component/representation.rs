//! External representation of a component.
//!
//! The representation is the wire/display form of a [`Component`]. Building a
//! display representation goes through a dedicated `include_secrets` flag so
//! secret configuration values never leave the core unless explicitly
//! requested; this is separate from the audit-path redaction in
//! [`crate::redact`].

use serde::{Deserialize, Serialize};

use super::{Component, ComponentConfig, ComponentId};
use crate::provider::ProviderRegistry;
use crate::realm::RealmId;
use crate::redact::redact_config;

/// The external form of a [`Component`].
///
/// `id` is absent on create input; `parent_id` defaults to the owning realm's
/// id when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRepresentation {
    /// Assigned id; absent on create input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable label.
    pub name: String,
    /// Capability category.
    pub provider_type: String,
    /// Concrete implementation within the provider type.
    pub provider_id: String,
    /// Parent component id; absent means top-level (realm root).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Optional secondary classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    /// Multi-valued configuration.
    #[serde(default)]
    pub config: ComponentConfig,
}

impl ComponentRepresentation {
    /// Builds a new model for the create pipeline.
    ///
    /// The id stays unassigned (the store assigns it) and an absent
    /// `parent_id` defaults to the realm root.
    pub fn into_model(self, realm: &RealmId) -> Component {
        let parent_id = self
            .parent_id
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| realm.as_str().to_string());
        Component {
            id: ComponentId::unassigned(),
            name: self.name,
            provider_type: self.provider_type,
            provider_id: self.provider_id,
            parent_id,
            sub_type: self.sub_type,
            config: self.config,
        }
    }

    /// Builds the replacement model for the update pipeline.
    ///
    /// Every field comes from the submitted representation (full-replace, no
    /// merging); only the immutable id is carried over from the stored copy.
    pub fn replace_model(self, existing: &Component, realm: &RealmId) -> Component {
        let mut model = self.into_model(realm);
        model.id = existing.id.clone();
        model
    }
}

impl Component {
    /// Converts the model to its external representation.
    ///
    /// With `include_secrets = false` (the display path), every config value
    /// whose key the provider schema declares secret is replaced by the
    /// placeholder. Key presence is preserved so consumers know the field
    /// exists.
    pub fn to_representation(
        &self,
        registry: &ProviderRegistry,
        include_secrets: bool,
    ) -> ComponentRepresentation {
        let config = if include_secrets {
            self.config.clone()
        } else {
            redact_config(&self.config, registry.lookup(&self.provider_type).as_deref())
        };
        ComponentRepresentation {
            id: Some(self.id.as_str().to_string()),
            name: self.name.clone(),
            provider_type: self.provider_type.clone(),
            provider_id: self.provider_id.clone(),
            parent_id: Some(self.parent_id.clone()),
            sub_type: self.sub_type.clone(),
            config,
        }
    }
}
