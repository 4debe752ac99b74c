//! Per-pane editor configuration sent to the embedded text editor.

use livepane_common::Language;
use serde::{Deserialize, Serialize};

/// Editor widget options, serialized with the widget's own option names.
///
/// Line numbers and line wrapping are always on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    /// Syntax highlighting mode id.
    pub mode: String,
    pub line_numbers: bool,
    pub theme: String,
    pub line_wrapping: bool,
}

impl EditorOptions {
    pub fn for_language(language: Language, theme: &str) -> Self {
        Self {
            mode: syntax_mode(language).to_string(),
            line_numbers: true,
            theme: theme.to_string(),
            line_wrapping: true,
        }
    }
}

/// Syntax mode id understood by the editor widget.
pub fn syntax_mode(language: Language) -> &'static str {
    match language {
        Language::Html => "htmlmixed",
        Language::Css => "css",
        Language::Js => "javascript",
    }
}
