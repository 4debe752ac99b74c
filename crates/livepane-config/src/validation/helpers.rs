//! Shared validation helpers used by all domain validators.

use regex::Regex;
use std::sync::LazyLock;

/// Hex color: #RGB, #RGBA, #RRGGBB, or #RRGGBBAA.
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// rgb()/rgba() with numeric arguments only.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*(,\s*[0-9]*\.?[0-9]+\s*)?\)$",
    )
    .unwrap()
});

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float). NaN is always out of range.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(value >= min && value <= max) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is a hex color or an `rgb()`/`rgba()` call.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if !is_color(value) {
        errors.push(format!("{name} = '{value}' is not a hex or rgb()/rgba() color"));
    }
}

fn is_color(value: &str) -> bool {
    let trimmed = value.trim();
    HEX_RE.is_match(trimmed) || RGB_RE.is_match(trimmed)
}

/// Push an error unless `value` is a non-empty `[a-z0-9-]` identifier.
pub(crate) fn validate_identifier(errors: &mut Vec<String>, name: &str, value: &str) {
    let ok = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !ok {
        errors.push(format!("{name} = '{value}' must match [a-z0-9-]+"));
    }
}
