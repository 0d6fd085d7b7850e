//! Server-side utility belt.
//!
//! A collection of small, independent helpers for request-handling code:
//!
//! - `intl`: server-side language detection and Accept-Language parsing
//! - `http`: cookie strings, request origins, and route matching
//! - `format`: human-readable byte formatting
//! - `time`: relative time, friendly durations, and timing instrumentation
//! - `encoding`: base64 helpers
//! - `validation`: invariant assertions and upload validation
//! - `text`: typographic quotes and small string helpers
//!
//! The one real component here is [`intl::LanguageDetector`]; everything else
//! is a leaf utility with no shared state.

pub mod encoding;
pub mod format;
pub mod http;
pub mod intl;
pub mod text;
pub mod time;
pub mod validation;

pub use intl::{DetectorOptions, LanguageDetector, Strategy};
