//! Cookie header construction and parsing.

use chrono::{DateTime, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters escaped in cookie names and values. Matches the JavaScript
/// `encodeURIComponent` unreserved set.
const COOKIE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => write!(f, "Strict"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::None => write!(f, "None"),
        }
    }
}

/// Attributes appended to a `Set-Cookie` header value.
#[derive(Debug, Clone, Default)]
pub struct CookieOptions {
    pub expires: Option<DateTime<Utc>>,
    pub path: Option<String>,
    pub same_site: Option<SameSite>,
    pub secure: bool,
    pub domain: Option<String>,
}

/// Build a `Set-Cookie` header value.
///
/// The name and value are percent-encoded; attributes are appended in the
/// order expires, path, SameSite, Secure, domain.
///
/// # Example
/// ```
/// use server_utils::http::{set_cookie_value, CookieOptions};
///
/// let header = set_cookie_value("lng", "de", &CookieOptions {
///     path: Some("/".to_string()),
///     ..Default::default()
/// });
/// assert_eq!(header, "lng=de; path=/");
/// ```
pub fn set_cookie_value(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut cookie = format!(
        "{}={}",
        utf8_percent_encode(name, COOKIE_ENCODE_SET),
        utf8_percent_encode(value, COOKIE_ENCODE_SET)
    );

    if let Some(expires) = options.expires {
        // RFC 7231 IMF-fixdate, as produced by Date#toUTCString
        cookie.push_str(&format!(
            "; expires={}",
            expires.format("%a, %d %b %Y %H:%M:%S GMT")
        ));
    }

    if let Some(path) = &options.path {
        cookie.push_str(&format!("; path={path}"));
    }

    if let Some(same_site) = options.same_site {
        cookie.push_str(&format!("; SameSite={same_site}"));
    }

    if options.secure {
        cookie.push_str("; Secure");
    }

    if let Some(domain) = &options.domain {
        cookie.push_str(&format!("; domain={domain}"));
    }

    cookie
}

/// Get a cookie value by name from a raw `Cookie` header value.
///
/// Returns `None` when the cookie is absent or its value is empty. The value
/// is percent-decoded.
pub fn get_cookie_value(raw_cookie_header: &str, name: &str) -> Option<String> {
    for pair in raw_cookie_header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let key = parts.next()?.trim();
        if key != name {
            continue;
        }

        let value = parts.next().unwrap_or("");
        if value.is_empty() {
            return None;
        }

        return percent_decode_str(value)
            .decode_utf8()
            .ok()
            .map(|decoded| decoded.into_owned());
    }

    None
}
