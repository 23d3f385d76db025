//! Admin audit trail for component writes.
//!
//! Every successful create, update, and delete emits one audit record. The
//! representation attached to a record is always the redacted form; raw
//! secret values never reach a sink.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::error::AuditError;
use crate::realm::RealmId;

/// The write operation an audit record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOperation {
    /// A new component was persisted.
    Create,
    /// An existing component was replaced.
    Update,
    /// A component was removed.
    Delete,
}

impl std::fmt::Display for AuditOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditOperation::Create => write!(f, "create"),
            AuditOperation::Update => write!(f, "update"),
            AuditOperation::Delete => write!(f, "delete"),
        }
    }
}

/// A single audit trail entry.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    /// Realm the operation ran in.
    pub realm: RealmId,
    /// The write operation performed.
    pub operation: AuditOperation,
    /// Id of the affected component.
    pub resource_id: String,
    /// Redacted representation of the written state; `None` for deletes.
    pub representation: Option<serde_json::Value>,
    /// When the record was built.
    pub recorded_at: DateTime<Utc>,
}

impl AuditRecord {
    /// Creates a record with no attached representation.
    pub fn new(realm: RealmId, operation: AuditOperation, resource_id: impl Into<String>) -> Self {
        Self {
            realm,
            operation,
            resource_id: resource_id.into(),
            representation: None,
            recorded_at: Utc::now(),
        }
    }

    /// Attaches the (already redacted) representation payload.
    pub fn with_representation(mut self, representation: serde_json::Value) -> Self {
        self.representation = Some(representation);
        self
    }
}

/// Destination for audit records.
///
/// Sinks must be safe to share across request handlers.
pub trait AuditSink: Send + Sync {
    /// Persists or forwards one record.
    fn record(&self, record: AuditRecord) -> Result<(), AuditError>;
}

/// Sink that emits records as structured tracing events.
///
/// This is the default sink for deployments without an external audit
/// pipeline.
#[derive(Debug, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    /// Creates the sink.
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingAuditSink {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError> {
        let representation = record
            .representation
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_default();
        tracing::info!(
            target: "ironveil::audit",
            realm = %record.realm,
            operation = %record.operation,
            resource_id = %record.resource_id,
            recorded_at = %record.recorded_at.to_rfc3339(),
            representation = %representation,
            "component audit event"
        );
        Ok(())
    }
}

/// Sink that buffers records in memory.
///
/// Used by tests to assert on the audit trail.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all records seen so far.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().clone()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError> {
        self.records.lock().push(record);
        Ok(())
    }
}
