//! Theme bridge: CSS custom properties for the chrome panes.
//!
//! Palette values are validated before they reach a page so that a
//! hand-edited config cannot inject CSS or script into the bundled panes.

mod generate;
mod sanitize;

pub use generate::{CssValueKind, CssVariable, ThemeVariables};
pub use sanitize::{validate_css_color, validate_css_length, validate_css_name, CssError};
