//! IronVeil Identity Server Component Core
//!
//! This crate implements realm component configuration: typed, multi-valued
//! configuration blobs that wire pluggable providers (user federation
//! connectors, key providers, and so on) into a realm. It covers the full
//! write pipeline — capability gating, provider-type validation, storage,
//! secret redaction, and audit emission — behind a single service type.
//!
//! # Architecture
//!
//! - [`realm`] - Realm identity and per-realm admin capabilities
//! - [`component`] - The component model, configuration map, and external
//!   representation
//! - [`provider`] - Provider-type schemas and the process-wide registry
//! - [`store`] - Storage backends ([`MemoryStore`], and [`SqliteStore`]
//!   behind the `sqlite` feature)
//! - [`service`] - The operations pipeline gluing the layers together
//! - [`audit`] - Audit records and sinks
//! - [`messages`] - Localized formatting of validation failures
//!
//! # Backend Features
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use ironveil_component::audit::TracingAuditSink;
//! use ironveil_component::component::{ComponentConfig, ComponentRepresentation};
//! use ironveil_component::provider::ProviderRegistry;
//! use ironveil_component::realm::{RealmAccess, RealmId};
//! use ironveil_component::service::ComponentService;
//! use ironveil_component::store::MemoryStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ComponentService::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(ProviderRegistry::builtin()),
//!     Arc::new(TracingAuditSink::new()),
//! );
//!
//! let realm = RealmId::new("acme");
//! let mut config = ComponentConfig::new();
//! config.put_single("connectionUrl", "ldap://localhost");
//!
//! let created = service
//!     .create(
//!         &realm,
//!         &RealmAccess::manage(),
//!         ComponentRepresentation {
//!             id: None,
//!             name: "corporate-ldap".to_string(),
//!             provider_type: "user-federation".to_string(),
//!             provider_id: "ldap".to_string(),
//!             parent_id: None,
//!             sub_type: None,
//!             config,
//!         },
//!     )
//!     .await?;
//! assert!(created.id.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! # Secrets
//!
//! Configuration keys a provider schema declares secret never leave the core
//! in readable form: representations returned by the service and audit
//! payloads both carry the [`redact::SECRET_PLACEHOLDER`] in their place.
//! Only the store holds raw values.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod audit;
pub mod component;
pub mod error;
pub mod messages;
pub mod provider;
pub mod realm;
pub mod redact;
pub mod service;
pub mod store;
pub mod validate;

// Re-export commonly used types at crate root
pub use component::{Component, ComponentConfig, ComponentId, ComponentRepresentation};
pub use error::{ComponentError, ComponentResult, StoreError, StoreResult, ValidationError};
pub use provider::ProviderRegistry;
pub use realm::{AccessLevel, RealmAccess, RealmId};
pub use service::ComponentService;
pub use store::{ComponentFilter, ComponentStore, MemoryStore};
#[cfg(feature = "sqlite")]
pub use store::SqliteStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
