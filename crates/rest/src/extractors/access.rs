//! Admin capability extractor.
//!
//! Extracts the caller's realm capabilities from request headers. The
//! capability check itself happens in the component core; this extractor
//! only resolves what the caller holds.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderName, request::Parts},
};
use ironveil_component::realm::RealmAccess;

/// Header carrying the caller's admin roles, comma-separated.
pub static X_ADMIN_ROLES: HeaderName = HeaderName::from_static("x-admin-roles");

/// Axum extractor for the caller's realm capabilities.
///
/// Reads the `X-Admin-Roles` header (`view`, `manage`, comma-separated;
/// unknown role names are ignored). A missing header yields a caller with no
/// capabilities, which every operation then rejects.
///
/// # Example
///
/// ```rust,ignore
/// use ironveil_rest::extractors::AdminAccess;
///
/// async fn handler(access: AdminAccess) {
///     println!("can manage: {}", access.as_realm_access().require_manage().is_ok());
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess(RealmAccess);

impl AdminAccess {
    /// Returns the underlying capability set.
    pub fn as_realm_access(&self) -> &RealmAccess {
        &self.0
    }
}

/// Parses the roles header into a capability set.
fn access_from_headers(headers: &HeaderMap) -> RealmAccess {
    match headers.get(&X_ADMIN_ROLES).and_then(|v| v.to_str().ok()) {
        Some(roles) => RealmAccess::from_roles(roles.split(',')),
        None => RealmAccess::none(),
    }
}

impl<S> FromRequestParts<S> for AdminAccess
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(AdminAccess(access_from_headers(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_missing_header_means_no_access() {
        let access = access_from_headers(&HeaderMap::new());
        assert!(access.require_view().is_err());
    }

    #[test]
    fn test_view_role() {
        let mut headers = HeaderMap::new();
        headers.insert(&X_ADMIN_ROLES, HeaderValue::from_static("view"));
        let access = access_from_headers(&headers);
        assert!(access.require_view().is_ok());
        assert!(access.require_manage().is_err());
    }

    #[test]
    fn test_manage_role_with_spaces_and_unknowns() {
        let mut headers = HeaderMap::new();
        headers.insert(
            &X_ADMIN_ROLES,
            HeaderValue::from_static("auditor, manage , other"),
        );
        let access = access_from_headers(&headers);
        assert!(access.require_manage().is_ok());
        assert!(access.require_view().is_ok());
    }
}
