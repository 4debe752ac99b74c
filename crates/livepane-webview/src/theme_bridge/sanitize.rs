//! CSS value sanitization.
//!
//! Accepted forms:
//! - names: `--` followed by lowercase letters, digits and hyphens
//! - colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()` and `rgba()`
//!   with numeric arguments
//! - lengths: a number with an optional `px`, `em`, `rem` or `%` unit

use std::sync::LazyLock;

use regex::Regex;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^--[a-z0-9][a-z0-9-]*$").unwrap());

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*[0-9.]+\s*,\s*[0-9.]+\s*,\s*[0-9.]+\s*(?:,\s*[0-9.]+\s*)?\)$").unwrap()
});

static LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?(?:px|em|rem|%)?$").unwrap());

/// A value the sanitizer refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CssError {
    #[error("invalid CSS custom property name '{0}'")]
    Name(String),
    #[error("invalid CSS color '{0}': only hex and rgb()/rgba() are allowed")]
    Color(String),
    #[error("invalid CSS length '{0}'")]
    Length(String),
}

pub fn validate_css_name(name: &str) -> Result<(), CssError> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(CssError::Name(name.to_string()))
    }
}

/// Validate a color. Named colors are rejected.
pub fn validate_css_color(value: &str) -> Result<(), CssError> {
    let trimmed = value.trim();
    if HEX_RE.is_match(trimmed) || rgb_function_ok(trimmed) {
        Ok(())
    } else {
        Err(CssError::Color(value.to_string()))
    }
}

pub fn validate_css_length(value: &str) -> Result<(), CssError> {
    if LENGTH_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(CssError::Length(value.to_string()))
    }
}

fn rgb_function_ok(value: &str) -> bool {
    if !RGB_RE.is_match(value) {
        return false;
    }
    let args = value.matches(',').count() + 1;
    let expected = if value.starts_with("rgba(") { 4 } else { 3 };
    args == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert!(validate_css_name("--navbar-bg").is_ok());
        assert!(validate_css_name("--handle2").is_ok());
        assert!(validate_css_name("navbar-bg").is_err());
        assert!(validate_css_name("--Navbar").is_err());
        assert!(validate_css_name("--a;b").is_err());
        assert!(validate_css_name("--").is_err());
    }

    #[test]
    fn hex_colors() {
        for ok in ["#fff", "#ffff", "#EDF2F7", "#1a202cff", " #000000 "] {
            assert!(validate_css_color(ok).is_ok(), "{ok}");
        }
        for bad in ["#ff", "#fffff", "#gggggg", "fff", ""] {
            assert!(validate_css_color(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn rgb_colors() {
        assert!(validate_css_color("rgb(0, 0, 0)").is_ok());
        assert!(validate_css_color("rgba(26,32,44,0.9)").is_ok());
        assert!(validate_css_color("rgb(0,0,0,1)").is_err());
        assert!(validate_css_color("rgba(0,0,0)").is_err());
        assert!(validate_css_color("rgb(var(--x),0,0)").is_err());
    }

    #[test]
    fn injection_attempts_are_colors_errors() {
        for bad in [
            "red",
            "#fff; } body { display:none",
            "url(javascript:alert(1))",
            "expression(alert(1))",
            "#fff</style><script>",
        ] {
            assert_eq!(
                validate_css_color(bad),
                Err(CssError::Color(bad.to_string()))
            );
        }
    }

    #[test]
    fn lengths() {
        for ok in ["72px", "1.5em", "0", "100%", "2rem", "-4px"] {
            assert!(validate_css_length(ok).is_ok(), "{ok}");
        }
        for bad in ["px", "10vh", "1e3px", "10px;", ""] {
            assert!(validate_css_length(bad).is_err(), "{bad}");
        }
    }
}
