//! Request URL helpers.

use crate::http::domain::request_origin;
use axum::http::Request;

/// The request URL with all query parameters stripped.
pub fn clean_url<B>(request: &Request<B>) -> String {
    format!("{}{}", request_origin(request), request.uri().path())
}

/// Check whether a route is active for the current path.
///
/// With `end = true` only an exact match counts; with `end = false` nested
/// paths under the route match too. The root route only matches the root.
pub fn is_route_active(route: &str, current_path: &str, end: bool) -> bool {
    let current = strip_query(current_path);

    if route == "/" {
        return current == "/";
    }

    if end {
        current == route
    } else {
        current == route || current.starts_with(&format!("{route}/"))
    }
}

/// Check whether a route is active, allowing nested paths up to `depth`
/// segments. Query parameters on the current path are ignored.
///
/// `route_active_within_depth("/account", "/account/settings", 2)` is true;
/// with depth 1 it is not, because the current path has two segments.
pub fn route_active_within_depth(route: &str, current_path: &str, depth: usize) -> bool {
    let current = strip_query(current_path);

    if route == "/" {
        return current == "/";
    }

    let route_segments: Vec<&str> = segments(route);
    let current_segments: Vec<&str> = segments(current);

    current_segments.len() <= depth
        && current_segments.len() >= route_segments.len()
        && route_segments
            .iter()
            .zip(&current_segments)
            .all(|(a, b)| a == b)
}

fn strip_query(path: &str) -> &str {
    path.split('?').next().unwrap_or(path)
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_clean_url_strips_query() {
        let request = Request::builder()
            .uri("https://example.com/settings?foo=bar&baz=1")
            .body(())
            .unwrap();
        assert_eq!(clean_url(&request), "https://example.com/settings");
    }

    #[test]
    fn test_clean_url_without_query() {
        let request = Request::builder()
            .uri("https://example.com/settings")
            .body(())
            .unwrap();
        assert_eq!(clean_url(&request), "https://example.com/settings");
    }

    // ==================== is_route_active ====================

    #[test]
    fn test_exact_match() {
        assert!(is_route_active("/home", "/home", true));
    }

    #[test]
    fn test_different_paths() {
        assert!(!is_route_active("/home", "/about", true));
    }

    #[test]
    fn test_root_only_matches_root() {
        assert!(is_route_active("/", "/", true));
        assert!(!is_route_active("/", "/home", true));
        assert!(!is_route_active("/", "/home", false));
    }

    #[test]
    fn test_nested_route_with_end_false() {
        assert!(is_route_active("/account", "/account/settings", false));
    }

    #[test]
    fn test_nested_route_with_end_true() {
        assert!(!is_route_active("/account", "/account/settings", true));
    }

    // ==================== route_active_within_depth ====================

    #[test]
    fn test_depth_exact_match() {
        assert!(route_active_within_depth("/home", "/home", 1));
    }

    #[test]
    fn test_depth_ignores_query_parameters() {
        assert!(route_active_within_depth("/home", "/home?foo=bar", 1));
    }

    #[test]
    fn test_depth_limits_nesting() {
        assert!(!route_active_within_depth("/account", "/account/settings", 1));
        assert!(route_active_within_depth("/account", "/account/settings", 2));
        assert!(route_active_within_depth("/account", "/account/settings/profile", 3));
    }

    #[test]
    fn test_depth_requires_prefix_match() {
        assert!(!route_active_within_depth("/dashboard", "/account/settings", 2));
    }

    #[test]
    fn test_depth_root_rules() {
        assert!(route_active_within_depth("/", "/", 1));
        assert!(!route_active_within_depth("/", "/home", 1));
    }
}
