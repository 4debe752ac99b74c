//! CSS generation from theme variables.
//!
//! Collects validated custom properties and renders them either as a
//! `:root` block for a page's initial stylesheet or as a script that
//! updates them live.

use serde::Serialize;

use super::sanitize::{validate_css_color, validate_css_length, validate_css_name, CssError};

/// A validated CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssVariable {
    /// Property name, e.g. `--navbar-bg`.
    pub name: String,
    pub value: String,
}

/// The validation applied to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssValueKind {
    Color,
    Length,
}

/// An ordered set of validated custom properties.
///
/// Rejected entries are logged and skipped so that one bad palette entry
/// leaves the rest of the theme intact.
#[derive(Debug, Clone, Default)]
pub struct ThemeVariables {
    vars: Vec<CssVariable>,
}

impl ThemeVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a variable, replacing an earlier one of the same name.
    pub fn try_push(&mut self, name: &str, value: &str, kind: CssValueKind) -> Result<(), CssError> {
        validate_css_name(name)?;
        match kind {
            CssValueKind::Color => validate_css_color(value)?,
            CssValueKind::Length => validate_css_length(value)?,
        }

        let value = value.trim().to_string();
        match self.vars.iter_mut().find(|v| v.name == name) {
            Some(existing) => existing.value = value,
            None => self.vars.push(CssVariable {
                name: name.to_string(),
                value,
            }),
        }
        Ok(())
    }

    /// Builder form of [`try_push`](Self::try_push) that logs and skips rejects.
    pub fn with(mut self, name: &str, value: &str, kind: CssValueKind) -> Self {
        if let Err(e) = self.try_push(name, value, kind) {
            tracing::warn!(name, value, error = %e, "theme variable rejected");
        }
        self
    }

    pub fn color(self, name: &str, value: &str) -> Self {
        self.with(name, value, CssValueKind::Color)
    }

    pub fn length(self, name: &str, value: &str) -> Self {
        self.with(name, value, CssValueKind::Length)
    }

    pub fn vars(&self) -> &[CssVariable] {
        &self.vars
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Render a `:root { ... }` block.
    pub fn to_root_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for var in &self.vars {
            css.push_str(&format!("  {}: {};\n", var.name, var.value));
        }
        css.push('}');
        css
    }

    /// Render a script that applies every variable via `style.setProperty`.
    pub fn to_injection_js(&self) -> String {
        let mut js = String::from("(function() {\n  var s = document.documentElement.style;\n");
        for var in &self.vars {
            // Names and values are validated, so JSON quoting is enough.
            let name = serde_json::Value::String(var.name.clone());
            let value = serde_json::Value::String(var.value.clone());
            js.push_str(&format!("  s.setProperty({name}, {value});\n"));
        }
        js.push_str("})();");
        js
    }
}
