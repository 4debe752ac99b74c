//! Closed enumerations shared by config, layout, and the app.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three editable source languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Css,
    Js,
}

impl Language {
    /// All languages in pane order.
    pub const ALL: [Language; 3] = [Language::Html, Language::Css, Language::Js];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Js => "js",
        }
    }

    /// Pane heading shown above the editor.
    pub fn label(self) -> &'static str {
        match self {
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Js => "JavaScript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Language::Html),
            "css" => Ok(Language::Css),
            "js" => Ok(Language::Js),
            other => Err(format!("unknown language '{other}'")),
        }
    }
}

/// Which set of editor panes is shown.
///
/// Only affects visibility: every buffer is composited regardless of mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    #[default]
    #[serde(rename = "html-css-js")]
    Full,
    #[serde(rename = "html-css")]
    MarkupOnly,
}

impl EditorMode {
    pub const ALL: [EditorMode; 2] = [EditorMode::Full, EditorMode::MarkupOnly];

    pub fn as_str(self) -> &'static str {
        match self {
            EditorMode::Full => "html-css-js",
            EditorMode::MarkupOnly => "html-css",
        }
    }

    /// Human-readable option text for the mode selector.
    pub fn display_name(self) -> &'static str {
        match self {
            EditorMode::Full => "HTML, CSS, JavaScript",
            EditorMode::MarkupOnly => "HTML & CSS",
        }
    }

    pub fn visible_languages(self) -> &'static [Language] {
        match self {
            EditorMode::Full => &[Language::Html, Language::Css, Language::Js],
            EditorMode::MarkupOnly => &[Language::Html, Language::Css],
        }
    }

    pub fn shows(self, language: Language) -> bool {
        self.visible_languages().contains(&language)
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html-css-js" => Ok(EditorMode::Full),
            "html-css" => Ok(EditorMode::MarkupOnly),
            other => Err(format!(
                "unknown editor mode '{other}' (expected 'html-css-js' or 'html-css')"
            )),
        }
    }
}

/// Page-lifetime light/dark presentation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
