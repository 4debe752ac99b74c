//! Resizable panel geometry.

use serde::{Deserialize, Serialize};

/// Sizing rules shared by every resizable panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelsConfig {
    /// Resting height of a panel before any drag.
    pub default_height: f64,
    /// Height of the drag strip at each panel's bottom edge.
    pub handle_height: f64,
    /// Floor a drag can shrink a panel to.
    pub min_height: f64,
    /// The editor column never gets narrower than this.
    pub editor_column_min_width: f64,
    /// Horizontal gap between the editor column and the preview.
    pub column_gap: f64,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            default_height: 300.0,
            handle_height: 10.0,
            min_height: 0.0,
            editor_column_min_width: 300.0,
            column_gap: 8.0,
        }
    }
}
