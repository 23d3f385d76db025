//! The component entity.
//!
//! A component is a stored configuration unit for a pluggable extension
//! point: a provider type, a concrete provider id, a parent reference, and a
//! multi-valued configuration map interpreted by provider-type-specific
//! validators.

mod config;
mod representation;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::realm::RealmId;

pub use config::ComponentConfig;
pub use representation::ComponentRepresentation;

/// An opaque component identifier, assigned at creation and immutable
/// thereafter.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Generates a fresh unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a sentinel id for a component that has not been stored yet.
    ///
    /// The store replaces it with a generated id on `add`.
    pub fn unassigned() -> Self {
        Self(String::new())
    }

    /// Returns `true` if the store has not assigned an id yet.
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentId({})", self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A stored configuration unit for a pluggable extension point.
///
/// # Invariants
///
/// - `id` is immutable and unique within a realm's component space.
/// - `name` is unique only within (`parent_id`, `provider_type`) scope.
/// - `parent_id` is never empty: it names another component's id, or the
///   owning realm's id when the component is top-level.
/// - `config` never contains an entry with an empty key (enforced by the
///   validator on every write).
///
/// Updates use full-replace semantics: an update replaces every field from
/// the submitted representation, it does not merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Unique identifier within the realm.
    pub id: ComponentId,
    /// Human-readable label.
    pub name: String,
    /// Capability category this component implements. Drives which validator
    /// and secret-field schema apply.
    pub provider_type: String,
    /// Concrete implementation within `provider_type`.
    pub provider_id: String,
    /// Id of the parent component, or the realm id for top-level components.
    pub parent_id: String,
    /// Optional secondary classification.
    pub sub_type: Option<String>,
    /// Multi-valued configuration, opaque at this layer.
    pub config: ComponentConfig,
}

impl Component {
    /// Returns `true` if this component sits directly under the realm root.
    pub fn is_top_level(&self, realm: &RealmId) -> bool {
        self.parent_id == realm.as_str()
    }
}
