//! Component storage backends.
//!
//! This module defines the [`ComponentStore`] trait plus the backends that
//! implement it. All operations are scoped to a [`RealmId`]; a store never
//! returns components from another realm.

use async_trait::async_trait;

use crate::component::{Component, ComponentId};
use crate::error::StoreResult;
use crate::realm::RealmId;

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Filter for component listings.
///
/// A filter that names a provider type but no parent is normalized to the
/// realm root before reaching a backend, so backends only ever see fully
/// resolved filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentFilter {
    /// Restrict to components with this parent id.
    pub parent: Option<String>,
    /// Restrict to components of this provider type.
    pub provider_type: Option<String>,
}

impl ComponentFilter {
    /// Matches every component in the realm.
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a filter from optional query inputs.
    pub fn new(parent: Option<String>, provider_type: Option<String>) -> Self {
        Self {
            parent,
            provider_type,
        }
    }

    /// Resolves the defaulting rule: a provider-type filter without a parent
    /// applies to top-level components, so the parent becomes the realm root.
    pub fn normalize(mut self, realm: &RealmId) -> Self {
        if self.provider_type.is_some() && self.parent.is_none() {
            self.parent = Some(realm.as_str().to_string());
        }
        self
    }

    /// Returns `true` when a component passes the filter.
    pub fn matches(&self, component: &Component) -> bool {
        if let Some(parent) = &self.parent
            && component.parent_id != *parent
        {
            return false;
        }
        if let Some(provider_type) = &self.provider_type
            && component.provider_type != *provider_type
        {
            return false;
        }
        true
    }
}

/// Core storage trait for realm components.
///
/// Mutating operations enforce referential integrity: a component's
/// `parent_id` must name either the realm root or an existing component in
/// the same realm, and a component that other components reference as their
/// parent cannot be removed.
///
/// Listings are returned in a stable order (by name, then id) regardless of
/// backend.
#[async_trait]
pub trait ComponentStore: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Persists a new component, assigning an id if none is set.
    ///
    /// # Errors
    ///
    /// * [`StoreError::ParentNotFound`](crate::error::StoreError::ParentNotFound)
    ///   if the parent reference resolves to nothing in the realm.
    async fn add(&self, realm: &RealmId, component: Component) -> StoreResult<Component>;

    /// Fetches a component by id, `None` if the realm does not hold it.
    async fn get(&self, realm: &RealmId, id: &ComponentId) -> StoreResult<Option<Component>>;

    /// Lists the realm's components passing the (already normalized) filter.
    async fn list(&self, realm: &RealmId, filter: &ComponentFilter)
        -> StoreResult<Vec<Component>>;

    /// Replaces a stored component wholesale.
    ///
    /// # Errors
    ///
    /// * [`StoreError::MissingComponent`](crate::error::StoreError::MissingComponent)
    ///   if the id is not present in the realm.
    /// * [`StoreError::ParentNotFound`](crate::error::StoreError::ParentNotFound)
    ///   if the new parent reference resolves to nothing.
    async fn update(&self, realm: &RealmId, component: &Component) -> StoreResult<()>;

    /// Removes a component.
    ///
    /// # Errors
    ///
    /// * [`StoreError::MissingComponent`](crate::error::StoreError::MissingComponent)
    ///   if the id is not present in the realm.
    /// * [`StoreError::ChildrenPresent`](crate::error::StoreError::ChildrenPresent)
    ///   if other components reference it as their parent.
    async fn remove(&self, realm: &RealmId, id: &ComponentId) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentConfig;

    fn component(parent: &str, provider_type: &str) -> Component {
        Component {
            id: ComponentId::generate(),
            name: "c".to_string(),
            provider_type: provider_type.to_string(),
            provider_id: "impl".to_string(),
            parent_id: parent.to_string(),
            sub_type: None,
            config: ComponentConfig::new(),
        }
    }

    #[test]
    fn test_normalize_defaults_parent_for_type_only_filter() {
        let realm = RealmId::new("acme");
        let filter = ComponentFilter::new(None, Some("user-federation".to_string()));
        let normalized = filter.normalize(&realm);
        assert_eq!(normalized.parent.as_deref(), Some("acme"));
    }

    #[test]
    fn test_normalize_keeps_explicit_parent() {
        let realm = RealmId::new("acme");
        let filter =
            ComponentFilter::new(Some("p1".to_string()), Some("user-federation".to_string()));
        let normalized = filter.normalize(&realm);
        assert_eq!(normalized.parent.as_deref(), Some("p1"));
    }

    #[test]
    fn test_normalize_leaves_unfiltered_listing_alone() {
        let realm = RealmId::new("acme");
        let normalized = ComponentFilter::all().normalize(&realm);
        assert_eq!(normalized, ComponentFilter::all());
    }

    #[test]
    fn test_filter_matches() {
        let c = component("acme", "user-federation");
        assert!(ComponentFilter::all().matches(&c));
        assert!(ComponentFilter::new(Some("acme".to_string()), None).matches(&c));
        assert!(!ComponentFilter::new(Some("other".to_string()), None).matches(&c));
        assert!(
            ComponentFilter::new(None, Some("user-federation".to_string())).matches(&c)
        );
        assert!(!ComponentFilter::new(None, Some("key-provider".to_string())).matches(&c));
    }
}
