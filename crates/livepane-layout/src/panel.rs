//! A single resizable panel: one height value, nothing else.

use std::fmt;

use livepane_common::Language;
use serde::{Deserialize, Serialize};

/// Identifies a resizable panel in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PanelId {
    Editor(Language),
    Preview,
}

impl PanelId {
    /// Every panel, in stacking order.
    pub const ALL: [PanelId; 4] = [
        PanelId::Editor(Language::Html),
        PanelId::Editor(Language::Css),
        PanelId::Editor(Language::Js),
        PanelId::Preview,
    ];
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelId::Editor(lang) => write!(f, "editor-{lang}"),
            PanelId::Preview => f.write_str("preview"),
        }
    }
}

/// Height state of one panel.
///
/// The stored size never drops below `floor`, and `floor` is never negative,
/// so a drag past the top edge leaves a zero-height (not negative) panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizablePanel {
    size: f64,
    floor: f64,
}

impl ResizablePanel {
    pub fn new(initial: f64, floor: f64) -> Self {
        let floor = if floor.is_finite() { floor.max(0.0) } else { 0.0 };
        let mut panel = Self { size: floor, floor };
        panel.set_size(initial);
        panel
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Apply a new raw size, clamped to the floor. Non-finite input is ignored.
    pub fn set_size(&mut self, raw: f64) {
        if raw.is_finite() {
            self.size = raw.max(self.floor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_size_clamps_to_zero() {
        let mut panel = ResizablePanel::new(300.0, 0.0);
        panel.set_size(-40.0);
        assert_eq!(panel.size(), 0.0);
    }

    #[test]
    fn floor_applies_to_initial_size() {
        let panel = ResizablePanel::new(10.0, 50.0);
        assert_eq!(panel.size(), 50.0);
    }

    #[test]
    fn negative_floor_is_raised_to_zero() {
        let mut panel = ResizablePanel::new(100.0, -20.0);
        assert_eq!(panel.floor(), 0.0);
        panel.set_size(-5.0);
        assert_eq!(panel.size(), 0.0);
    }

    #[test]
    fn nan_is_ignored() {
        let mut panel = ResizablePanel::new(300.0, 0.0);
        panel.set_size(f64::NAN);
        assert_eq!(panel.size(), 300.0);
    }

    #[test]
    fn panel_id_display() {
        assert_eq!(PanelId::Editor(Language::Css).to_string(), "editor-css");
        assert_eq!(PanelId::Preview.to_string(), "preview");
    }
}
