//! Human-readable formatting helpers.

/// Units for base-10 byte formatting.
const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count as a human-readable base-10 string with two decimals.
///
/// # Example
/// ```
/// use server_utils::format::format_bytes;
///
/// assert_eq!(format_bytes(1500.0), "1.5 KB");
/// ```
pub fn format_bytes(bytes: f64) -> String {
    format_bytes_with_precision(bytes, 2)
}

/// Format a byte count with a given number of decimal places.
///
/// Zero, NaN, and negative inputs all render as `"0 Bytes"`. Negative
/// precision clamps to 0. Trailing zeros are trimmed, so 1536 bytes with two
/// decimals is `"1.54 KB"` while 1500 is `"1.5 KB"`.
pub fn format_bytes_with_precision(bytes: f64, decimals: i32) -> String {
    if !bytes.is_finite() || bytes <= 0.0 {
        return "0 Bytes".to_string();
    }

    let decimals = decimals.max(0) as usize;

    let exponent = (bytes.log10() / 3.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);

    let scaled = bytes / 1000_f64.powi(exponent as i32);
    let formatted = format!("{scaled:.decimals$}");
    let rendered = trim_trailing_zeros(&formatted);

    format!("{rendered} {}", UNITS[exponent])
}

fn trim_trailing_zeros(value: &str) -> &str {
    if !value.contains('.') {
        return value;
    }
    value.trim_end_matches('0').trim_end_matches('.')
}
