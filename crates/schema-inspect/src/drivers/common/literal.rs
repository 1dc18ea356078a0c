//! Helpers for reading SQL literals out of catalog default expressions.

/// Check if text is a plain numeric literal.
///
/// Accepts optional sign, digits, a decimal point and an exponent. Words
/// that `f64` parsing would accept (`inf`, `NaN`) are rejected.
pub fn is_numeric(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty()
        && text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && text.parse::<f64>().is_ok()
}

/// Strip one pair of wrapping single quotes and unescape doubled quotes.
///
/// Returns `None` unless `text` both starts and ends with a quote.
pub fn unquote(text: &str) -> Option<String> {
    let inner = text.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("''", "'"))
}
