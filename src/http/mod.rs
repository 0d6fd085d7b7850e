//! HTTP helpers: cookie strings, request origins, and route matching.

mod cookie;
mod domain;
mod request;

pub use cookie::{get_cookie_value, set_cookie_value, CookieOptions, SameSite};
pub use domain::request_origin;
pub use request::{clean_url, is_route_active, route_active_within_depth};
