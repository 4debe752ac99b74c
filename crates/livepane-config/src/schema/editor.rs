//! Editor pane configuration.

use livepane_common::EditorMode;
use serde::{Deserialize, Serialize};

/// Options forwarded to every editor pane.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pane set shown at startup.
    pub initial_mode: EditorMode,
    /// Editor syntax theme used in light mode.
    pub light_theme: String,
    /// Editor syntax theme used in dark mode.
    pub dark_theme: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_mode: EditorMode::Full,
            light_theme: "eclipse".into(),
            dark_theme: "dracula".into(),
        }
    }
}
