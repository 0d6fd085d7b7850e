//! Text typography and small string helpers.

use regex::Regex;
use std::sync::OnceLock;

/// Typographic quote characters for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QuoteStyle {
    open: &'static str,
    close: &'static str,
    open_single: &'static str,
    close_single: &'static str,
}

/// Locale-specific quote styles.
/// See <https://en.wikipedia.org/wiki/Quotation_mark#Summary_table>.
const QUOTE_STYLES: [(&str, QuoteStyle); 19] = [
    ("cs", QuoteStyle { open: "\u{201E}", close: "\u{201D}", open_single: "\u{201A}", close_single: "\u{2019}" }),
    // Danish, Norwegian
    ("da", QuoteStyle { open: "\u{00BB}", close: "\u{00AB}", open_single: "\u{2039}", close_single: "\u{203A}" }),
    ("de", QuoteStyle { open: "\u{201E}", close: "\u{201D}", open_single: "\u{201A}", close_single: "\u{2019}" }),
    // Swiss German uses guillemets
    ("de-ch", QuoteStyle { open: "\u{00AB}", close: "\u{00BB}", open_single: "\u{2039}", close_single: "\u{203A}" }),
    ("en", QuoteStyle { open: "\u{201C}", close: "\u{201D}", open_single: "\u{2018}", close_single: "\u{2019}" }),
    ("es", QuoteStyle { open: "\u{00AB}", close: "\u{00BB}", open_single: "\u{201C}", close_single: "\u{201D}" }),
    ("fi", QuoteStyle { open: "\u{201D}", close: "\u{201D}", open_single: "\u{2019}", close_single: "\u{2019}" }),
    // French guillemets carry inner spacing
    ("fr", QuoteStyle { open: "\u{00AB} ", close: " \u{00BB}", open_single: "\u{2039} ", close_single: " \u{203A}" }),
    ("hu", QuoteStyle { open: "\u{201E}", close: "\u{201D}", open_single: "\u{201A}", close_single: "\u{2019}" }),
    ("it", QuoteStyle { open: "\u{00AB}", close: "\u{00BB}", open_single: "\u{201C}", close_single: "\u{201D}" }),
    ("ja", QuoteStyle { open: "\u{300C}", close: "\u{300D}", open_single: "\u{300E}", close_single: "\u{300F}" }),
    ("nl", QuoteStyle { open: "\u{2018}", close: "\u{2019}", open_single: "\u{2018}", close_single: "\u{2019}" }),
    ("no", QuoteStyle { open: "\u{00BB}", close: "\u{00AB}", open_single: "\u{2039}", close_single: "\u{203A}" }),
    ("pl", QuoteStyle { open: "\u{201E}", close: "\u{201D}", open_single: "\u{201A}", close_single: "\u{2019}" }),
    ("pt", QuoteStyle { open: "\u{00AB}", close: "\u{00BB}", open_single: "\u{201C}", close_single: "\u{201D}" }),
    ("ru", QuoteStyle { open: "\u{00AB}", close: "\u{00BB}", open_single: "\u{201A}", close_single: "\u{2019}" }),
    ("sv", QuoteStyle { open: "\u{201D}", close: "\u{201D}", open_single: "\u{2019}", close_single: "\u{2019}" }),
    ("zh", QuoteStyle { open: "\u{300C}", close: "\u{300D}", open_single: "\u{300E}", close_single: "\u{300F}" }),
    ("default", QuoteStyle { open: "\u{201C}", close: "\u{201D}", open_single: "\u{2018}", close_single: "\u{2019}" }),
];

static DOUBLE_QUOTE_REGEX: OnceLock<Regex> = OnceLock::new();
static SINGLE_QUOTE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Resolve the quote style for a locale: exact match first, then the base
/// language, then the English default.
fn quote_style(locale: &str) -> QuoteStyle {
    let normalized = locale.to_ascii_lowercase();

    let lookup = |key: &str| {
        QUOTE_STYLES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, style)| *style)
    };

    if let Some(style) = lookup(&normalized) {
        return style;
    }

    if let Some((base, _)) = normalized.split_once('-') {
        if let Some(style) = lookup(base) {
            return style;
        }
    }

    lookup("default").unwrap()
}

/// Replace straight quotes with typographically correct quotes for a locale.
///
/// Double quotes and paired single quotes are replaced; unpaired single
/// quotes (contractions like "don't") are left alone.
///
/// # Example
/// ```
/// use server_utils::text::typographic_quotes;
///
/// assert_eq!(typographic_quotes("\"Hello\"", "de"), "\u{201E}Hello\u{201D}");
/// ```
pub fn typographic_quotes(text: &str, locale: &str) -> String {
    let style = quote_style(locale);

    let double = DOUBLE_QUOTE_REGEX.get_or_init(|| Regex::new(r#""([^"]*)""#).unwrap());
    let result = double.replace_all(text, format!("{}$1{}", style.open, style.close));

    let single = SINGLE_QUOTE_REGEX.get_or_init(|| Regex::new(r"'([^']*)'").unwrap());
    single
        .replace_all(&result, format!("{}$1{}", style.open_single, style.close_single))
        .into_owned()
}

/// Parse a loose boolean from a string: `"true"` and `"1"` are true.
pub fn to_boolean(value: Option<&str>) -> bool {
    matches!(value, Some("true") | Some("1"))
}

/// Replace the `&shy;` HTML entity with the Unicode soft hyphen.
pub fn replace_shy(input: &str) -> String {
    input.replace("&shy;", "\u{00AD}")
}

/// Split text into sentences at terminal punctuation.
pub fn split_into_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_terminal = false;

    for (index, character) in text.char_indices() {
        if after_terminal && character.is_whitespace() {
            sentences.push(text[start..index].trim_end());
            start = index + character.len_utf8();
        }
        after_terminal = matches!(character, '.' | '!' | '?');
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Split text into whitespace-separated words.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Truncate text to a maximum length, appending a suffix when truncated.
pub fn truncate_text(text: &str, max_length: usize, suffix: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let keep = max_length.saturating_sub(suffix.chars().count());
    let truncated: String = text.chars().take(keep).collect();
    format!("{truncated}{suffix}")
}

/// Author info parsed from a string like `Name <email> (url)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
}

static AUTHOR_REGEX: OnceLock<Regex> = OnceLock::new();

/// Parse an author string in the format `Name <email> (url)`.
/// All three parts are optional.
pub fn parse_author_string(input: &str) -> AuthorInfo {
    let regex = AUTHOR_REGEX
        .get_or_init(|| Regex::new(r"^(.*?)\s*(?:<([^>]+)>)?\s*(?:\(([^)]+)\))?$").unwrap());

    let Some(captures) = regex.captures(input) else {
        return AuthorInfo::default();
    };

    let non_empty = |index: usize| {
        captures
            .get(index)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    };

    AuthorInfo {
        name: non_empty(1),
        email: non_empty(2),
        url: non_empty(3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== typographic_quotes ====================

    #[test]
    fn test_english_quotes() {
        assert_eq!(typographic_quotes("\"Hello\"", "en"), "\u{201C}Hello\u{201D}");
    }

    #[test]
    fn test_german_quotes() {
        assert_eq!(typographic_quotes("\"Hello\"", "de"), "\u{201E}Hello\u{201D}");
    }

    #[test]
    fn test_french_quotes_with_spacing() {
        assert_eq!(typographic_quotes("\"Hello\"", "fr"), "\u{00AB} Hello \u{00BB}");
    }

    #[test]
    fn test_region_falls_back_to_base_language() {
        // No "de-at" entry; falls back to "de"
        assert_eq!(typographic_quotes("\"Hi\"", "de-AT"), "\u{201E}Hi\u{201D}");
    }

    #[test]
    fn test_region_specific_style() {
        assert_eq!(typographic_quotes("\"Hi\"", "de-CH"), "\u{00AB}Hi\u{00BB}");
    }

    #[test]
    fn test_unknown_locale_uses_english() {
        assert_eq!(typographic_quotes("\"Hi\"", "xx"), "\u{201C}Hi\u{201D}");
    }

    #[test]
    fn test_single_quote_pairs() {
        assert_eq!(typographic_quotes("'quoted'", "en"), "\u{2018}quoted\u{2019}");
    }

    #[test]
    fn test_contraction_left_alone() {
        assert_eq!(typographic_quotes("don't", "en"), "don't");
    }

    // ==================== small helpers ====================

    #[test]
    fn test_to_boolean() {
        assert!(to_boolean(Some("true")));
        assert!(to_boolean(Some("1")));
        assert!(!to_boolean(Some("false")));
        assert!(!to_boolean(Some("yes")));
        assert!(!to_boolean(None));
    }

    #[test]
    fn test_replace_shy() {
        assert_eq!(replace_shy("hy&shy;phen"), "hy\u{00AD}phen");
    }

    #[test]
    fn test_split_into_sentences() {
        assert_eq!(
            split_into_sentences("One. Two! Three? Four"),
            vec!["One.", "Two!", "Three?", "Four"]
        );
    }

    #[test]
    fn test_split_into_words() {
        assert_eq!(split_into_words("a  b\tc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10, "..."), "short");
        assert_eq!(truncate_text("a longer sentence", 10, "..."), "a longe...");
    }

    #[test]
    fn test_parse_author_full() {
        let author = parse_author_string("Jane Doe <jane@example.com> (https://example.com)");
        assert_eq!(author.name.as_deref(), Some("Jane Doe"));
        assert_eq!(author.email.as_deref(), Some("jane@example.com"));
        assert_eq!(author.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_parse_author_name_only() {
        let author = parse_author_string("Jane Doe");
        assert_eq!(author.name.as_deref(), Some("Jane Doe"));
        assert_eq!(author.email, None);
        assert_eq!(author.url, None);
    }

    #[test]
    fn test_parse_author_empty() {
        assert_eq!(parse_author_string(""), AuthorInfo::default());
    }
}
