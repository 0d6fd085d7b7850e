//! Client locale extraction from request headers.

use crate::intl::accept_language::parse_accept_language;
use axum::http::{header, HeaderMap};

/// Get the client's locales from the `Accept-Language` header.
///
/// Returns the locales sorted by quality value, highest first, or `None` when
/// the header is absent, unreadable, or contains nothing but wildcards.
pub fn client_locales(headers: &HeaderMap) -> Option<Vec<String>> {
    let raw = headers.get(header::ACCEPT_LANGUAGE)?.to_str().ok()?;

    let locales: Vec<String> = parse_accept_language(raw)
        .into_iter()
        .map(|entry| entry.tag)
        .collect();

    if locales.is_empty() {
        return None;
    }

    Some(locales)
}
