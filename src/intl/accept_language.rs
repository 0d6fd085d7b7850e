//! Accept-Language header parsing.
//!
//! This module implements the quality-ordered parsing shared by every
//! detection strategy: a candidate value (a single tag, a comma-joined set of
//! tags, or a full `Accept-Language` header) is parsed into an ordered
//! sequence of language tags, highest quality first.

use std::cmp::Ordering;

/// A single parsed entry from an Accept-Language style value.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageEntry {
    /// The language tag (e.g., "en", "de-CH")
    pub tag: String,

    /// The quality weight; 1.0 when no `q=` parameter is present
    pub quality: f32,
}

/// Parse an Accept-Language style value into a quality-ordered tag sequence.
///
/// Rules:
/// - Entries without a `q=` parameter default to quality 1.0.
/// - Malformed quality values are treated as 0 and sort last.
/// - The sort is stable: entries with equal quality keep their source order.
/// - The `*` wildcard is ignored.
///
/// # Example
/// ```
/// use server_utils::intl::parse_accept_language;
///
/// let entries = parse_accept_language("de;q=0.5,en;q=0.9");
/// assert_eq!(entries[0].tag, "en");
/// assert_eq!(entries[1].tag, "de");
/// ```
pub fn parse_accept_language(value: &str) -> Vec<LanguageEntry> {
    let mut entries: Vec<LanguageEntry> = Vec::new();

    for part in value.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let mut pieces = part.split(';');
        let tag = pieces.next().unwrap_or("").trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }

        let mut quality = 1.0_f32;
        for param in pieces {
            let param = param.trim();
            if let Some(raw) = param.strip_prefix("q=") {
                quality = raw.trim().parse().unwrap_or(0.0);
                // Guard against "q=NaN" and negative weights
                if !quality.is_finite() || quality < 0.0 {
                    quality = 0.0;
                }
            }
        }

        entries.push(LanguageEntry {
            tag: tag.to_string(),
            quality,
        });
    }

    // Vec::sort_by is stable, so ties preserve header order
    entries.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));

    entries
}
