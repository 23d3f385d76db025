//! Component operations pipeline.
//!
//! [`ComponentService`] is the single entry point for component reads and
//! writes. Every operation runs the same stages in order: access gate,
//! filter/model resolution, validation (writes only), store call, audit
//! emission. Callers above this layer never touch the store directly.

use std::sync::Arc;

use crate::audit::{AuditOperation, AuditRecord, AuditSink};
use crate::component::{Component, ComponentId, ComponentRepresentation};
use crate::error::{ComponentError, ComponentResult, StoreError};
use crate::provider::ProviderRegistry;
use crate::realm::{RealmAccess, RealmId};
use crate::redact::redact;
use crate::store::{ComponentFilter, ComponentStore};
use crate::validate::validate;

/// Realm component service.
///
/// Generic over the store backend; the registry and audit sink are shared
/// across all realms served by this instance.
pub struct ComponentService<S: ComponentStore> {
    store: Arc<S>,
    registry: Arc<ProviderRegistry>,
    audit: Arc<dyn AuditSink>,
}

impl<S: ComponentStore> ComponentService<S> {
    /// Creates a service over the given store, registry, and audit sink.
    pub fn new(store: Arc<S>, registry: Arc<ProviderRegistry>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            store,
            registry,
            audit,
        }
    }

    /// The provider registry this service validates against.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Lists components, secrets masked.
    ///
    /// Requires view access. A provider-type filter without a parent is
    /// scoped to top-level components.
    pub async fn list(
        &self,
        realm: &RealmId,
        access: &RealmAccess,
        filter: ComponentFilter,
    ) -> ComponentResult<Vec<ComponentRepresentation>> {
        access.require_view()?;
        let filter = filter.normalize(realm);
        let components = self.store.list(realm, &filter).await?;
        Ok(components
            .iter()
            .map(|c| c.to_representation(&self.registry, false))
            .collect())
    }

    /// Fetches one component, secrets masked.
    ///
    /// Requires manage access: a single component's full configuration is
    /// an administration surface, not a browsing one.
    pub async fn get(
        &self,
        realm: &RealmId,
        access: &RealmAccess,
        id: &ComponentId,
    ) -> ComponentResult<ComponentRepresentation> {
        access.require_manage()?;
        let component = self.require_component(realm, id).await?;
        Ok(component.to_representation(&self.registry, false))
    }

    /// Creates a component and returns its stored representation.
    ///
    /// Requires manage access. The submitted representation is validated
    /// against its provider type's schema before anything is written.
    pub async fn create(
        &self,
        realm: &RealmId,
        access: &RealmAccess,
        representation: ComponentRepresentation,
    ) -> ComponentResult<ComponentRepresentation> {
        access.require_manage()?;
        let model = representation.into_model(realm);
        validate(&model, &self.registry)?;

        let stored = self.store.add(realm, model).await?;
        let masked = redact(&stored, &self.registry).to_representation(&self.registry, true);
        self.emit(
            AuditRecord::new(realm.clone(), AuditOperation::Create, stored.id.as_str())
                .with_representation(self.audit_payload(&masked)),
        );
        Ok(masked)
    }

    /// Replaces a component wholesale.
    ///
    /// Requires manage access. The stored state is replaced by the submitted
    /// representation field for field; there is no merging.
    pub async fn update(
        &self,
        realm: &RealmId,
        access: &RealmAccess,
        id: &ComponentId,
        representation: ComponentRepresentation,
    ) -> ComponentResult<()> {
        access.require_manage()?;
        let existing = self.require_component(realm, id).await?;
        let model = representation.replace_model(&existing, realm);
        validate(&model, &self.registry)?;

        self.store.update(realm, &model).await?;
        let masked = redact(&model, &self.registry).to_representation(&self.registry, true);
        self.emit(
            AuditRecord::new(realm.clone(), AuditOperation::Update, id.as_str())
                .with_representation(self.audit_payload(&masked)),
        );
        Ok(())
    }

    /// Removes a component.
    ///
    /// Requires manage access. Fails with `ChildrenPresent` while other
    /// components still reference the id as their parent. The audit record
    /// carries no representation; it is emitted once the delete is known to
    /// proceed, before the store removal runs.
    pub async fn delete(
        &self,
        realm: &RealmId,
        access: &RealmAccess,
        id: &ComponentId,
    ) -> ComponentResult<()> {
        access.require_manage()?;
        self.require_component(realm, id).await?;

        // A delete the store will reject must not reach the audit trail.
        let children = self
            .store
            .list(
                realm,
                &ComponentFilter::new(Some(id.as_str().to_string()), None),
            )
            .await?;
        if !children.is_empty() {
            return Err(StoreError::ChildrenPresent {
                id: id.as_str().to_string(),
                count: children.len(),
            }
            .into());
        }

        self.emit(AuditRecord::new(
            realm.clone(),
            AuditOperation::Delete,
            id.as_str(),
        ));
        self.store.remove(realm, id).await?;
        Ok(())
    }

    async fn require_component(
        &self,
        realm: &RealmId,
        id: &ComponentId,
    ) -> ComponentResult<Component> {
        self.store
            .get(realm, id)
            .await?
            .ok_or_else(|| ComponentError::NotFound {
                id: id.as_str().to_string(),
            })
    }

    fn audit_payload(&self, redacted: &ComponentRepresentation) -> serde_json::Value {
        serde_json::to_value(redacted).unwrap_or(serde_json::Value::Null)
    }

    /// A failing sink is logged but never fails the operation itself.
    fn emit(&self, record: AuditRecord) {
        if let Err(err) = self.audit.record(record) {
            tracing::error!(error = %err, "failed to emit audit record");
        }
    }
}
