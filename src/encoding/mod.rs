//! Base64 helpers.

use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine};
use rand::RngCore;

/// Decode a URL-safe base64 string into bytes.
///
/// Accepts the `-`/`_` URL-safe alphabet and input with missing padding, as
/// produced by web push subscriptions and JWT segments.
pub fn url_base64_to_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    let normalized: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let padding = (4 - normalized.len() % 4) % 4;
    let padded = format!("{normalized}{}", "=".repeat(padding));

    STANDARD.decode(padded)
}

/// Generate a random base64 string from 16 bytes of entropy.
pub fn random_base64() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_plain_base64() {
        assert_eq!(url_base64_to_bytes("SGVsbG8=").unwrap(), b"Hello");
    }

    #[test]
    fn test_adds_missing_padding() {
        assert_eq!(url_base64_to_bytes("SGVsbG8").unwrap(), b"Hello");
    }

    #[test]
    fn test_translates_url_safe_alphabet() {
        // "+/" and "-_" decode to the same bytes
        let standard = url_base64_to_bytes("a+b/").unwrap();
        let url_safe = url_base64_to_bytes("a-b_").unwrap();
        assert_eq!(standard, url_safe);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(url_base64_to_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_invalid_input_errors() {
        assert!(url_base64_to_bytes("!!!!").is_err());
    }

    #[test]
    fn test_random_base64_shape() {
        let value = random_base64();
        // 16 bytes encode to 24 base64 characters including padding
        assert_eq!(value.len(), 24);
        assert_eq!(url_base64_to_bytes(&value).unwrap().len(), 16);
    }

    #[test]
    fn test_random_base64_varies() {
        assert_ne!(random_base64(), random_base64());
    }
}
