//! Error types for the component configuration core.
//!
//! This module defines all error types used throughout the core, following a
//! hierarchy that separates access errors, validation errors, store errors,
//! and audit errors.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::realm::AccessLevel;

/// The primary error type for component operations.
///
/// This enum encompasses all possible errors that can occur while handling a
/// component request, organized by category.
#[derive(Error, Debug)]
pub enum ComponentError {
    /// The requested component does not exist in the realm.
    #[error("component not found: {id}")]
    NotFound { id: String },

    /// The caller lacks the capability required for the operation.
    #[error(transparent)]
    Forbidden(#[from] AccessError),

    /// The submitted configuration was rejected by provider-type rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The component store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The audit sink failed.
    #[error(transparent)]
    Audit(#[from] AuditError),
}

/// Errors raised by the access gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The caller does not hold the required capability.
    #[error("{required} access required")]
    Denied { required: AccessLevel },
}

/// A provider-type validation failure.
///
/// The error carries a message key for localized lookup plus an ordered list
/// of parameters. Parameters are either message keys needing their own
/// localized substitution or literal values inserted verbatim; the caller
/// performing message formatting must preserve that distinction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed: {message_key}")]
pub struct ValidationError {
    /// Key into the message catalog.
    pub message_key: String,
    /// Ordered substitution parameters for the message template.
    pub parameters: Vec<MessageParam>,
}

impl ValidationError {
    /// Creates a validation error with no parameters.
    pub fn new(message_key: impl Into<String>) -> Self {
        Self {
            message_key: message_key.into(),
            parameters: Vec::new(),
        }
    }

    /// Appends a parameter that is itself a message key.
    pub fn with_key_param(mut self, key: impl Into<String>) -> Self {
        self.parameters.push(MessageParam::Key(key.into()));
        self
    }

    /// Appends a literal parameter inserted verbatim.
    pub fn with_literal_param(mut self, value: impl Into<String>) -> Self {
        self.parameters.push(MessageParam::Literal(value.into()));
        self
    }
}

/// A single substitution parameter of a [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageParam {
    /// A message key that must be resolved through the catalog before insertion.
    Key(String),
    /// A literal value (date, number, user input) inserted verbatim.
    Literal(String),
}

/// Errors originating from the component store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The submitted parent reference resolves to nothing in the realm.
    #[error("parent component not found: {parent_id}")]
    ParentNotFound { parent_id: String },

    /// The component is referenced as a parent by other components.
    #[error("component {id} is referenced as a parent by {count} component(s)")]
    ChildrenPresent { id: String, count: usize },

    /// An update or remove targeted an id the store does not hold.
    #[error("component not present in store: {id}")]
    MissingComponent { id: String },

    /// The backing store is unreachable.
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    /// A stored configuration payload could not be (de)serialized.
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// Internal backend error.
    #[error("internal store error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Errors raised by an audit sink.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The sink rejected or failed to persist the record.
    #[error("audit sink failure: {message}")]
    SinkFailure { message: String },
}

/// Result type alias for component operations.
pub type ComponentResult<T> = Result<T, ComponentError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// Implement conversions from common error types

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Internal {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StoreError {
    fn from(err: r2d2::Error) -> Self {
        StoreError::Unavailable {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ComponentError::NotFound {
            id: "abc-123".to_string(),
        };
        assert_eq!(err.to_string(), "component not found: abc-123");
    }

    #[test]
    fn test_access_error_display() {
        let err = AccessError::Denied {
            required: AccessLevel::Manage,
        };
        assert_eq!(err.to_string(), "manage access required");
    }

    #[test]
    fn test_validation_error_parameters_preserve_kind() {
        let err = ValidationError::new("missingConfigFieldMessage")
            .with_key_param("bindCredentialLabel")
            .with_literal_param("42");

        assert_eq!(err.message_key, "missingConfigFieldMessage");
        assert_eq!(
            err.parameters,
            vec![
                MessageParam::Key("bindCredentialLabel".to_string()),
                MessageParam::Literal("42".to_string()),
            ]
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::ChildrenPresent {
            id: "parent-1".to_string(),
            count: 2,
        };
        assert!(err.to_string().contains("referenced as a parent by 2"));
    }

    #[test]
    fn test_component_error_from_store_error() {
        let err: ComponentError = StoreError::Unavailable {
            message: "down".to_string(),
        }
        .into();
        assert!(matches!(err, ComponentError::Store(_)));
    }
}
