//! Layout engine types and configuration.

use livepane_common::Rect;
use livepane_config::schema::{PanelsConfig, WindowConfig};
use serde::Serialize;

use crate::panel::PanelId;

/// Configuration for the engine that positions chrome and panels.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    pub toolbar_height: f64,
    pub footer_height: f64,
    /// Height of the drag strip at each panel's bottom edge.
    pub handle_height: f64,
    /// Gap between the editor column and the preview.
    pub column_gap: f64,
    pub editor_column_min_width: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default(), &PanelsConfig::default())
    }
}

impl LayoutEngine {
    pub fn from_config(window: &WindowConfig, panels: &PanelsConfig) -> Self {
        Self {
            toolbar_height: window.toolbar_height as f64,
            footer_height: window.footer_height as f64,
            handle_height: panels.handle_height,
            column_gap: panels.column_gap,
            editor_column_min_width: panels.editor_column_min_width,
        }
    }
}

/// Placement of one panel: its full box, the webview area, and the handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelRect {
    pub id: PanelId,
    /// Full panel box, height equal to the panel's size.
    pub outer: Rect,
    /// Area covered by the panel's webview.
    pub content: Rect,
    /// Drag strip along the bottom edge, left uncovered for pointer events.
    pub handle: Rect,
}

/// Result of a layout pass over the whole window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowLayout {
    pub toolbar: Rect,
    pub footer: Rect,
    /// Visible panels in stacking order (editors, then preview).
    pub panels: Vec<PanelRect>,
}

impl WindowLayout {
    pub fn panel(&self, id: PanelId) -> Option<&PanelRect> {
        self.panels.iter().find(|p| p.id == id)
    }
}
