//! Native window and chrome configuration.

use serde::{Deserialize, Serialize};

/// Window geometry and chrome (toolbar/footer) sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title, also shown in the toolbar.
    pub title: String,
    /// Initial logical width.
    pub width: u32,
    /// Initial logical height.
    pub height: u32,
    /// Height of the toolbar strip at the top.
    pub toolbar_height: u32,
    /// Height of the footer strip at the bottom.
    pub footer_height: u32,
    /// Name shown in the footer copyright line.
    pub footer_owner: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Playground".into(),
            width: 1280,
            height: 800,
            toolbar_height: 72,
            footer_height: 52,
            footer_owner: "Livepane".into(),
        }
    }
}
