//! Multi-valued component configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A mapping from configuration key to an ordered sequence of string values.
///
/// The map is semantically arbitrary at this layer; provider-type-specific
/// validators interpret it. Keys are kept sorted so serialization and listing
/// order are deterministic.
///
/// # Examples
///
/// ```
/// use ironveil_component::component::ComponentConfig;
///
/// let mut config = ComponentConfig::new();
/// config.put_single("connectionUrl", "ldap://localhost");
/// config.put("hosts", vec!["a".to_string(), "b".to_string()]);
///
/// assert_eq!(config.first("connectionUrl"), Some("ldap://localhost"));
/// assert_eq!(config.get("hosts").map(|v| v.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentConfig(BTreeMap<String, Vec<String>>);

impl ComponentConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all values for a key, replacing any previous values.
    pub fn put(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.0.insert(key.into(), values);
    }

    /// Sets a single value for a key, replacing any previous values.
    pub fn put_single(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    /// Returns all values for a key.
    pub fn get(&self, key: &str) -> Option<&Vec<String>> {
        self.0.get(key)
    }

    /// Returns the first value for a key.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vec<String>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of keys in the configuration.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the configuration has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for ComponentConfig {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
