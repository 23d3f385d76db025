//! Realm identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque realm identifier.
///
/// The realm id doubles as the root sentinel for the component hierarchy:
/// a top-level component's `parent_id` is the id of its owning realm.
///
/// # Examples
///
/// ```
/// use ironveil_component::realm::RealmId;
///
/// let realm = RealmId::new("acme");
/// assert_eq!(realm.as_str(), "acme");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RealmId(String);

impl RealmId {
    /// Creates a new realm id from the given string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the realm id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RealmId({})", self.0)
    }
}

impl From<&str> for RealmId {
    fn from(s: &str) -> Self {
        RealmId::new(s)
    }
}

impl From<String> for RealmId {
    fn from(s: String) -> Self {
        RealmId::new(s)
    }
}

impl AsRef<str> for RealmId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
