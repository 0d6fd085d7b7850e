//! File-input accept attribute matching.

/// Check whether a MIME type satisfies an `accept` attribute value.
///
/// Supports exact types (`image/png`), type wildcards (`image/*`), and the
/// universal wildcard (`*/*`), in any comma-separated combination.
///
/// # Example
/// ```
/// use server_utils::validation::verify_accept;
///
/// assert!(verify_accept("image/png", "audio/*,video/*,image/png"));
/// assert!(!verify_accept("application/pdf", "image/*,video/*"));
/// ```
pub fn verify_accept(mime: &str, accept: &str) -> bool {
    accept.split(',').map(str::trim).any(|pattern| {
        if pattern == "*/*" {
            return true;
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return mime
                .split('/')
                .next()
                .is_some_and(|mime_type| mime_type.eq_ignore_ascii_case(prefix));
        }

        pattern.eq_ignore_ascii_case(mime)
    })
}
