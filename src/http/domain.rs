//! Request origin reconstruction.

use axum::http::{header, HeaderMap, Request};

/// Build the externally visible origin (`scheme://host`) for a request.
///
/// Behind a proxy the URI the server sees is usually plain HTTP, so the
/// scheme prefers the `x-forwarded-proto` header over the URI scheme. The
/// host prefers the `Host` header over the URI authority.
pub fn request_origin<B>(request: &Request<B>) -> String {
    let headers = request.headers();

    let scheme = forwarded_proto(headers)
        .or_else(|| request.uri().scheme_str())
        .unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| request.uri().authority().map(|a| a.to_string()))
        .unwrap_or_default();

    format!("{scheme}://{host}")
}

fn forwarded_proto(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get("x-forwarded-proto")?.to_str().ok()?;
    // Proxies may append, producing "https,http"; the first entry is the
    // client-facing protocol.
    let proto = value.split(',').next()?.trim();
    if proto.is_empty() {
        None
    } else {
        Some(proto)
    }
}
