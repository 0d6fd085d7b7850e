//! Server-side language detection.
//!
//! The `LanguageDetector` resolves the preferred language of an incoming
//! request by trying an ordered chain of detection strategies (URL path,
//! cookie, session, query parameter, Accept-Language header) and falling back
//! to a configured default when none of them yields a supported tag.
//!
//! The detector holds no per-request state: one instance is built once from
//! its options and shared across requests.

use crate::intl::accept_language::parse_accept_language;
use crate::intl::locale::client_locales;
use anyhow::Result;
use async_trait::async_trait;
use axum::http::{header, HeaderMap, Request, Uri};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use url::form_urlencoded;

/// Default key used for both the session value and the search parameter.
pub const DEFAULT_LANGUAGE_KEY: &str = "lng";

/// A detection strategy, tried in the configured order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// First non-empty URL path segment (e.g., `/de/settings`)
    UrlPath,
    /// Language decoded from the raw `Cookie` header by the configured codec
    Cookie,
    /// Language stored in the session under the configured session key
    Session,
    /// Query parameter named by the configured search param key
    SearchParams,
    /// `Accept-Language` header, quality-ordered
    Header,
}

impl Strategy {
    /// The default detection order.
    pub const DEFAULT_ORDER: [Strategy; 5] = [
        Strategy::UrlPath,
        Strategy::Cookie,
        Strategy::Session,
        Strategy::SearchParams,
        Strategy::Header,
    ];
}

/// A language value produced by a cookie codec or session store: either a
/// single tag or an ordered list of candidate tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageValue {
    Single(String),
    Multiple(Vec<String>),
}

impl LanguageValue {
    /// Join the value into the comma-separated form the shared tag validation
    /// understands.
    fn to_candidate(&self) -> String {
        match self {
            LanguageValue::Single(tag) => tag.clone(),
            LanguageValue::Multiple(tags) => tags.join(","),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            LanguageValue::Single(tag) => tag.is_empty(),
            LanguageValue::Multiple(tags) => tags.iter().all(|tag| tag.is_empty()),
        }
    }
}

impl From<&str> for LanguageValue {
    fn from(tag: &str) -> Self {
        LanguageValue::Single(tag.to_string())
    }
}

impl From<String> for LanguageValue {
    fn from(tag: String) -> Self {
        LanguageValue::Single(tag)
    }
}

impl From<Vec<String>> for LanguageValue {
    fn from(tags: Vec<String>) -> Self {
        LanguageValue::Multiple(tags)
    }
}

/// Decodes a language preference from the raw `Cookie` header value.
///
/// Decode failures are swallowed by the detector: the strategy yields nothing
/// and resolution moves on to the next strategy in order.
#[async_trait]
pub trait CookieCodec: Send + Sync {
    async fn decode(&self, raw_cookie_header: Option<&str>) -> Result<Option<LanguageValue>>;
}

/// Loads a session by request identity (the raw `Cookie` header value).
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, raw_cookie_header: Option<&str>) -> Result<Box<dyn Session>>;
}

/// A loaded session handle.
pub trait Session: Send + Sync {
    /// Get the stored language value for a key, if any.
    fn get(&self, key: &str) -> Option<LanguageValue>;
}

/// Configuration errors raised when building a [`LanguageDetector`].
///
/// These are fatal and construction-time only; `detect` itself never fails.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("a session store is required when the detection order is only `session`")]
    SessionStoreRequired,

    #[error("a cookie codec is required when the detection order is only `cookie`")]
    CookieCodecRequired,

    #[error("at least one supported language is required")]
    NoSupportedLanguages,
}

/// Options for building a [`LanguageDetector`].
///
/// `supported_languages` should match the languages the application actually
/// serves; `fallback_language` is returned when no strategy yields a
/// supported tag and is expected to be valid downstream.
pub struct DetectorOptions {
    supported_languages: Vec<String>,
    fallback_language: String,
    cookie_codec: Option<Arc<dyn CookieCodec>>,
    session_store: Option<Arc<dyn SessionStore>>,
    session_key: String,
    search_param_key: String,
    order: Option<Vec<Strategy>>,
}

impl DetectorOptions {
    /// Create options with the given supported languages and fallback.
    pub fn new(
        supported_languages: impl IntoIterator<Item = impl Into<String>>,
        fallback_language: impl Into<String>,
    ) -> Self {
        Self {
            supported_languages: supported_languages.into_iter().map(Into::into).collect(),
            fallback_language: fallback_language.into(),
            cookie_codec: None,
            session_store: None,
            session_key: DEFAULT_LANGUAGE_KEY.to_string(),
            search_param_key: DEFAULT_LANGUAGE_KEY.to_string(),
            order: None,
        }
    }

    /// Use a cookie to read the user's preferred language.
    pub fn with_cookie_codec(mut self, codec: impl CookieCodec + 'static) -> Self {
        self.cookie_codec = Some(Arc::new(codec));
        self
    }

    /// Use a session to read the user's preferred language.
    pub fn with_session_store(mut self, store: impl SessionStore + 'static) -> Self {
        self.session_store = Some(Arc::new(store));
        self
    }

    /// Change the key used to read the language from the session.
    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    /// Change the query parameter name used by the search params strategy.
    pub fn with_search_param_key(mut self, key: impl Into<String>) -> Self {
        self.search_param_key = key.into();
        self
    }

    /// Override the order in which strategies are tried.
    pub fn with_order(mut self, order: impl IntoIterator<Item = Strategy>) -> Self {
        self.order = Some(order.into_iter().collect());
        self
    }
}

/// Resolves the preferred language of a request fully server-side.
///
/// # Example
/// ```
/// use axum::http::Request;
/// use server_utils::intl::{DetectorOptions, LanguageDetector};
///
/// # tokio_test::block_on(async {
/// let detector = LanguageDetector::new(DetectorOptions::new(["en", "de"], "en")).unwrap();
///
/// let request = Request::builder()
///     .uri("https://example.com/?lng=de")
///     .body(())
///     .unwrap();
///
/// assert_eq!(detector.detect(&request).await, "de");
/// # });
/// ```
pub struct LanguageDetector {
    supported_languages: Vec<String>,
    fallback_language: String,
    cookie_codec: Option<Arc<dyn CookieCodec>>,
    session_store: Option<Arc<dyn SessionStore>>,
    session_key: String,
    search_param_key: String,
    order: Vec<Strategy>,
}

impl LanguageDetector {
    /// Build a detector from options.
    ///
    /// Fails when `supported_languages` is empty, or when the order is a
    /// single strategy whose required collaborator is missing. These checks
    /// run here so misconfiguration surfaces at startup, not per request.
    pub fn new(options: DetectorOptions) -> Result<Self, DetectorError> {
        if options.supported_languages.is_empty() {
            return Err(DetectorError::NoSupportedLanguages);
        }

        if let Some(order) = &options.order {
            if matches!(order.as_slice(), [Strategy::Session]) && options.session_store.is_none() {
                return Err(DetectorError::SessionStoreRequired);
            }
            if matches!(order.as_slice(), [Strategy::Cookie]) && options.cookie_codec.is_none() {
                return Err(DetectorError::CookieCodecRequired);
            }
        }

        Ok(Self {
            supported_languages: options.supported_languages,
            fallback_language: options.fallback_language,
            cookie_codec: options.cookie_codec,
            session_store: options.session_store,
            session_key: options.session_key,
            search_param_key: options.search_param_key,
            order: options
                .order
                .unwrap_or_else(|| Strategy::DEFAULT_ORDER.to_vec()),
        })
    }

    /// Detect the request's preferred language.
    ///
    /// Strategies are tried in the configured order; the first one that
    /// yields a supported tag wins. A strategy that produces only unsupported
    /// candidates does not end the chain: the next strategy still runs.
    /// Extraction failures are swallowed, so this always returns a member of
    /// the supported set or the fallback language.
    pub async fn detect<B>(&self, request: &Request<B>) -> String {
        for strategy in &self.order {
            let found = match strategy {
                Strategy::UrlPath => self.from_url_path(request.uri()),
                Strategy::SearchParams => self.from_search_params(request.uri()),
                Strategy::Cookie => self.from_cookie(request.headers()).await,
                Strategy::Session => self.from_session(request.headers()).await,
                Strategy::Header => self.from_header(request.headers()),
            };

            if let Some(tag) = found {
                return tag;
            }
        }

        self.fallback_language.clone()
    }

    fn from_url_path(&self, uri: &Uri) -> Option<String> {
        let first_segment = uri.path().split('/').find(|segment| !segment.is_empty())?;
        self.first_supported(first_segment)
    }

    fn from_search_params(&self, uri: &Uri) -> Option<String> {
        let query = uri.query()?;
        let value = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == self.search_param_key.as_str())
            .map(|(_, value)| value.into_owned())?;
        self.first_supported(&value)
    }

    async fn from_cookie(&self, headers: &HeaderMap) -> Option<String> {
        let codec = self.cookie_codec.as_ref()?;
        let raw = raw_cookie_header(headers);

        match codec.decode(raw).await {
            Ok(Some(value)) if !value.is_empty() => self.first_supported(&value.to_candidate()),
            Ok(_) => None,
            Err(error) => {
                debug!(%error, "cookie decode failed, trying next strategy");
                None
            }
        }
    }

    async fn from_session(&self, headers: &HeaderMap) -> Option<String> {
        let store = self.session_store.as_ref()?;
        let raw = raw_cookie_header(headers);

        let session = match store.load(raw).await {
            Ok(session) => session,
            Err(error) => {
                debug!(%error, "session load failed, trying next strategy");
                return None;
            }
        };

        let value = session.get(&self.session_key)?;
        if value.is_empty() {
            return None;
        }

        self.first_supported(&value.to_candidate())
    }

    fn from_header(&self, headers: &HeaderMap) -> Option<String> {
        let locales = client_locales(headers)?;
        self.first_supported(&locales.join(","))
    }

    /// Shared tag validation: parse the candidate into a quality-ordered
    /// sequence and return the first tag in the supported set.
    fn first_supported(&self, candidate: &str) -> Option<String> {
        parse_accept_language(candidate)
            .into_iter()
            .map(|entry| entry.tag)
            .find(|tag| self.supported_languages.iter().any(|lang| lang == tag))
    }
}

fn raw_cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::COOKIE).and_then(|value| value.to_str().ok())
}
