//! Error types for the admin REST API.
//!
//! This module defines all error types used throughout the REST layer, with
//! automatic conversion to JSON error responses.
//!
//! # Error Mapping
//!
//! Core component errors are mapped to HTTP status codes:
//!
//! | Component Error | HTTP Status |
//! |-----------------|-------------|
//! | NotFound | 404 |
//! | Forbidden | 403 |
//! | Validation | 400 (message localized via the catalog) |
//! | Store(ParentNotFound) | 400 |
//! | Store(ChildrenPresent) | 409 |
//! | Store(MissingComponent) | 404 |
//! | Store(other) / Audit | 500 |
//!
//! Every error body has the shape `{"errorMessage": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ironveil_component::error::{ComponentError, StoreError};
use ironveil_component::messages::MessageCatalog;
use std::fmt;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Component not found (HTTP 404).
    NotFound {
        /// The component ID.
        id: String,
    },

    /// Bad request - validation error (HTTP 400).
    BadRequest {
        /// Error message, already localized.
        message: String,
    },

    /// Access denied (HTTP 403).
    Forbidden {
        /// Error message.
        message: String,
    },

    /// Conflicting state (HTTP 409).
    Conflict {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => {
                write!(f, "Component not found: {}", id)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::Forbidden { message } => {
                write!(f, "Forbidden: {}", message)
            }
            RestError::Conflict { message } => {
                write!(f, "Conflict: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RestError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                format!("Component {} not found", id),
            ),
            RestError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            RestError::Forbidden { message } => (StatusCode::FORBIDDEN, message.clone()),
            RestError::Conflict { message } => (StatusCode::CONFLICT, message.clone()),
            RestError::InternalError { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
            }
        };

        (status, Json(error_body(&message))).into_response()
    }
}

impl RestError {
    /// Maps a core error to its REST form.
    ///
    /// Validation failures are formatted through the message catalog for the
    /// request's locale; everything else carries its own message.
    pub fn from_component(err: ComponentError, catalog: &MessageCatalog, locale: &str) -> Self {
        match err {
            ComponentError::NotFound { id } => RestError::NotFound { id },
            ComponentError::Forbidden(e) => RestError::Forbidden {
                message: e.to_string(),
            },
            ComponentError::Validation(e) => RestError::BadRequest {
                message: catalog.format(locale, &e),
            },
            ComponentError::Store(e) => match e {
                StoreError::ParentNotFound { .. } => RestError::BadRequest {
                    message: e.to_string(),
                },
                StoreError::ChildrenPresent { .. } => RestError::Conflict {
                    message: e.to_string(),
                },
                StoreError::MissingComponent { id } => RestError::NotFound { id },
                other => RestError::InternalError {
                    message: other.to_string(),
                },
            },
            ComponentError::Audit(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

/// Creates the JSON error body.
fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "errorMessage": message })
}

/// Result type alias for REST handlers.
pub type RestResult<T> = Result<T, RestError>;
