//! In-memory component store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::component::{Component, ComponentId};
use crate::error::{StoreError, StoreResult};
use crate::realm::RealmId;

use super::{ComponentFilter, ComponentStore};

/// Store keeping everything in process memory.
///
/// The default backend for tests and ephemeral deployments. Contents do not
/// survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    realms: RwLock<HashMap<String, BTreeMap<String, Component>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn check_parent(
        components: &BTreeMap<String, Component>,
        realm: &RealmId,
        component: &Component,
    ) -> StoreResult<()> {
        if component.is_top_level(realm) || components.contains_key(&component.parent_id) {
            Ok(())
        } else {
            Err(StoreError::ParentNotFound {
                parent_id: component.parent_id.clone(),
            })
        }
    }
}

#[async_trait]
impl ComponentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn add(&self, realm: &RealmId, mut component: Component) -> StoreResult<Component> {
        let mut realms = self.realms.write();
        let components = realms.entry(realm.as_str().to_string()).or_default();

        Self::check_parent(components, realm, &component)?;

        if component.id.is_unassigned() {
            component.id = ComponentId::generate();
        }
        components.insert(component.id.as_str().to_string(), component.clone());
        Ok(component)
    }

    async fn get(&self, realm: &RealmId, id: &ComponentId) -> StoreResult<Option<Component>> {
        let realms = self.realms.read();
        Ok(realms
            .get(realm.as_str())
            .and_then(|components| components.get(id.as_str()))
            .cloned())
    }

    async fn list(
        &self,
        realm: &RealmId,
        filter: &ComponentFilter,
    ) -> StoreResult<Vec<Component>> {
        let realms = self.realms.read();
        let mut result: Vec<Component> = realms
            .get(realm.as_str())
            .map(|components| {
                components
                    .values()
                    .filter(|c| filter.matches(c))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        result.sort_by(|a, b| {
            (a.name.as_str(), a.id.as_str()).cmp(&(b.name.as_str(), b.id.as_str()))
        });
        Ok(result)
    }

    async fn update(&self, realm: &RealmId, component: &Component) -> StoreResult<()> {
        let mut realms = self.realms.write();
        let components = realms
            .get_mut(realm.as_str())
            .ok_or_else(|| StoreError::MissingComponent {
                id: component.id.as_str().to_string(),
            })?;

        if !components.contains_key(component.id.as_str()) {
            return Err(StoreError::MissingComponent {
                id: component.id.as_str().to_string(),
            });
        }
        Self::check_parent(components, realm, component)?;

        components.insert(component.id.as_str().to_string(), component.clone());
        Ok(())
    }

    async fn remove(&self, realm: &RealmId, id: &ComponentId) -> StoreResult<()> {
        let mut realms = self.realms.write();
        let components = realms
            .get_mut(realm.as_str())
            .ok_or_else(|| StoreError::MissingComponent {
                id: id.as_str().to_string(),
            })?;

        if !components.contains_key(id.as_str()) {
            return Err(StoreError::MissingComponent {
                id: id.as_str().to_string(),
            });
        }

        let children = components
            .values()
            .filter(|c| c.parent_id == id.as_str())
            .count();
        if children > 0 {
            return Err(StoreError::ChildrenPresent {
                id: id.as_str().to_string(),
                count: children,
            });
        }

        components.remove(id.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentConfig;

    fn component(name: &str, parent: &str) -> Component {
        Component {
            id: ComponentId::unassigned(),
            name: name.to_string(),
            provider_type: "user-federation".to_string(),
            provider_id: "ldap".to_string(),
            parent_id: parent.to_string(),
            sub_type: None,
            config: ComponentConfig::new(),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_get_roundtrips() {
        let store = MemoryStore::new();
        let realm = RealmId::new("acme");

        let stored = store.add(&realm, component("ldap1", "acme")).await.unwrap();
        assert!(!stored.id.is_unassigned());

        let fetched = store.get(&realm, &stored.id).await.unwrap().unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn test_realms_are_isolated() {
        let store = MemoryStore::new();
        let acme = RealmId::new("acme");
        let other = RealmId::new("other");

        let stored = store.add(&acme, component("ldap1", "acme")).await.unwrap();
        assert!(store.get(&other, &stored.id).await.unwrap().is_none());
        assert!(store
            .list(&other, &ComponentFilter::all())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_unknown_parent() {
        let store = MemoryStore::new();
        let realm = RealmId::new("acme");

        let err = store
            .add(&realm, component("ldap1", "no-such-parent"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ParentNotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_name_then_id() {
        let store = MemoryStore::new();
        let realm = RealmId::new("acme");

        store.add(&realm, component("zeta", "acme")).await.unwrap();
        store.add(&realm, component("alpha", "acme")).await.unwrap();
        store.add(&realm, component("alpha", "acme")).await.unwrap();

        let listed = store.list(&realm, &ComponentFilter::all()).await.unwrap();
        let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "alpha", "zeta"]);
        assert!(listed[0].id.as_str() < listed[1].id.as_str());
    }

    #[tokio::test]
    async fn test_list_filters_by_parent_and_type() {
        let store = MemoryStore::new();
        let realm = RealmId::new("acme");

        let parent = store.add(&realm, component("parent", "acme")).await.unwrap();
        store
            .add(&realm, component("child", parent.id.as_str()))
            .await
            .unwrap();

        let top = store
            .list(
                &realm,
                &ComponentFilter::new(Some("acme".to_string()), None),
            )
            .await
            .unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "parent");

        let children = store
            .list(
                &realm,
                &ComponentFilter::new(Some(parent.id.as_str().to_string()), None),
            )
            .await
            .unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "child");
    }

    #[tokio::test]
    async fn test_update_replaces_and_rejects_missing() {
        let store = MemoryStore::new();
        let realm = RealmId::new("acme");

        let mut stored = store.add(&realm, component("ldap1", "acme")).await.unwrap();
        stored.name = "renamed".to_string();
        store.update(&realm, &stored).await.unwrap();

        let fetched = store.get(&realm, &stored.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "renamed");

        let mut ghost = component("ghost", "acme");
        ghost.id = ComponentId::generate();
        let err = store.update(&realm, &ghost).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingComponent { .. }));
    }

    #[tokio::test]
    async fn test_remove_rejects_referenced_parent() {
        let store = MemoryStore::new();
        let realm = RealmId::new("acme");

        let parent = store.add(&realm, component("parent", "acme")).await.unwrap();
        store
            .add(&realm, component("child", parent.id.as_str()))
            .await
            .unwrap();

        let err = store.remove(&realm, &parent.id).await.unwrap_err();
        assert!(matches!(err, StoreError::ChildrenPresent { count: 1, .. }));

        // Still present after the rejected remove.
        assert!(store.get(&realm, &parent.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_remove_leaf_succeeds() {
        let store = MemoryStore::new();
        let realm = RealmId::new("acme");

        let stored = store.add(&realm, component("ldap1", "acme")).await.unwrap();
        store.remove(&realm, &stored.id).await.unwrap();
        assert!(store.get(&realm, &stored.id).await.unwrap().is_none());

        let err = store.remove(&realm, &stored.id).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingComponent { .. }));
    }
}
