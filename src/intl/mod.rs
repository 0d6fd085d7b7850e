//! Internationalization utilities.
//!
//! The centerpiece is the [`LanguageDetector`], which resolves a request's
//! preferred language fully server-side from an ordered chain of detection
//! strategies. The supporting pieces are the Accept-Language parser shared by
//! all strategies and a helper to read the client's locales from headers.
//!
//! # Example
//!
//! ```rust,ignore
//! use server_utils::intl::{DetectorOptions, LanguageDetector, Strategy};
//!
//! let detector = LanguageDetector::new(
//!     DetectorOptions::new(["en", "de"], "en")
//!         .with_order([Strategy::UrlPath, Strategy::Header]),
//! )?;
//!
//! let language = detector.detect(&request).await;
//! ```

mod accept_language;
mod detector;
mod locale;

pub use accept_language::{parse_accept_language, LanguageEntry};
pub use detector::{
    CookieCodec, DetectorError, DetectorOptions, LanguageDetector, LanguageValue, Session,
    SessionStore, Strategy, DEFAULT_LANGUAGE_KEY,
};
pub use locale::client_locales;
