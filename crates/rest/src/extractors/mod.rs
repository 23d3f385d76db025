//! Axum extractors for admin request context.

mod access;
mod locale;

pub use access::{AdminAccess, X_ADMIN_ROLES};
pub use locale::RequestLocale;
