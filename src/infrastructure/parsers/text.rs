use crate::error::{ProfileError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static CONTROL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\r\n]").unwrap());
static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());
static NON_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.]").unwrap());

/// Removes tabs, carriage returns and newlines. Spaces are kept.
pub fn remove_all_ws(text: &str) -> String {
    CONTROL_WS.replace_all(text, "").into_owned()
}

/// Reads every digit in `text` as one unsigned integer ("1,024 XP" is 1024).
pub fn make_int(text: &str) -> Result<u64> {
    let digits = NON_DIGITS.replace_all(text, "");
    digits
        .parse()
        .map_err(|_| ProfileError::Parse(format!("no integer in '{}'", text.trim())))
}

/// Reads every digit and dot in `text` as one float ("1,234.5 hrs" is 1234.5).
pub fn make_float(text: &str) -> Result<f64> {
    let decimal = NON_DECIMAL.replace_all(text, "");
    decimal
        .parse()
        .map_err(|_| ProfileError::Parse(format!("no number in '{}'", text.trim())))
}

/// Parses a store price. Free titles cost 0.0 and an empty label means no
/// price is listed.
pub fn parse_price(text: &str) -> Result<Option<f64>> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return Ok(None);
    }
    if text.contains("free") {
        return Ok(Some(0.0));
    }

    // "19,99€" uses the comma as decimal separator
    if text.contains(',') && !text.contains('.') {
        return make_float(&text.replace(',', ".")).map(Some);
    }
    make_float(&text).map(Some)
}

/// Collapses every run of whitespace to a single space and trims the ends.
pub fn squash_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
