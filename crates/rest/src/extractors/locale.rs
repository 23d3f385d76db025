//! Request locale extractor.
//!
//! Resolves the locale used to format validation error messages from the
//! `Accept-Language` header.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use ironveil_component::messages::DEFAULT_LOCALE;

/// Axum extractor for the request locale.
///
/// Takes the primary subtag of the first language in `Accept-Language`
/// (quality weights are ignored) and falls back to `en`.
#[derive(Debug, Clone)]
pub struct RequestLocale(String);

impl RequestLocale {
    /// The resolved locale tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parses `Accept-Language` down to a catalog locale.
fn locale_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(|value| {
            let first = value.split(',').next()?;
            let tag = first.split(';').next()?.trim();
            let primary = tag.split('-').next()?.trim().to_lowercase();
            if primary.is_empty() { None } else { Some(primary) }
        })
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestLocale(locale_from_headers(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_missing_header_defaults_to_en() {
        assert_eq!(locale_from_headers(&HeaderMap::new()), "en");
    }

    #[test]
    fn test_simple_tag() {
        assert_eq!(locale_from_headers(&headers("de")), "de");
    }

    #[test]
    fn test_region_and_weights_stripped() {
        assert_eq!(
            locale_from_headers(&headers("pt-BR,pt;q=0.9,en;q=0.8")),
            "pt"
        );
    }
}
