//! Mouse-driven panel resizing.
//!
//! A press on a panel's handle strip starts a gesture in the panel stack;
//! moves come either from the native window or, while the pointer is over
//! a child webview, from that webview's forwarded `pointer_move` messages.

use winit::window::CursorIcon;

use livepane_layout::PanelId;

use super::core::LivepaneApp;

// =============================================================================
// TYPES
// =============================================================================

/// Cursor shape the native window should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorZone {
    None,
    RowResize,
}

impl CursorZone {
    pub fn icon(self) -> CursorIcon {
        match self {
            CursorZone::None => CursorIcon::Default,
            CursorZone::RowResize => CursorIcon::RowResize,
        }
    }
}

// =============================================================================
// HIT TESTING
// =============================================================================

pub fn cursor_zone(hovered: Option<PanelId>, dragging: bool) -> CursorZone {
    if dragging || hovered.is_some() {
        CursorZone::RowResize
    } else {
        CursorZone::None
    }
}

// =============================================================================
// DRAG LIFECYCLE
// =============================================================================

impl LivepaneApp {
    /// Start resizing `panel` from vertical position `y`.
    pub(super) fn begin_drag(&mut self, panel: PanelId, y: f64) {
        self.panels.pointer_down(panel, y);
        tracing::debug!(%panel, y, size = self.panels.size(panel), "drag started");
        self.set_pointer_capture(true);
        self.set_cursor_zone(CursorZone::RowResize);
    }

    /// Pointer moved to window-relative `y` during a drag.
    pub(super) fn drag_to(&mut self, y: f64) {
        if self.panels.pointer_move(y).is_some() {
            self.relayout();
        }
    }

    /// End the active drag, if any. Safe to call repeatedly.
    pub(super) fn end_drag(&mut self, reason: &'static str) {
        if let Some(panel) = self.panels.pointer_up() {
            tracing::debug!(%panel, reason, size = self.panels.size(panel), "drag ended");
            self.set_pointer_capture(false);
            let (x, y) = self.cursor_pos;
            self.update_hover(x, y);
        }
    }

    /// Refresh the cursor shape for a pointer resting at `(x, y)`.
    pub(super) fn update_hover(&mut self, x: f64, y: f64) {
        let hovered = livepane_layout::hit_test_handle(&self.layout, x, y);
        let zone = cursor_zone(hovered, self.panels.is_dragging());
        self.set_cursor_zone(zone);
    }

    pub(super) fn set_cursor_zone(&mut self, zone: CursorZone) {
        if self.cursor_zone == zone {
            return;
        }
        self.cursor_zone = zone;
        if let Some(ref w) = self.window {
            w.set_cursor(zone.icon());
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use livepane_common::Language;
    use livepane_config::LivepaneConfig;

    #[test]
    fn cursor_zone_follows_hover_and_drag() {
        assert_eq!(cursor_zone(None, false), CursorZone::None);
        assert_eq!(
            cursor_zone(Some(PanelId::Preview), false),
            CursorZone::RowResize
        );
        assert_eq!(cursor_zone(None, true), CursorZone::RowResize);
    }

    #[test]
    fn cursor_zone_icons() {
        assert_eq!(CursorZone::None.icon(), CursorIcon::Default);
        assert_eq!(CursorZone::RowResize.icon(), CursorIcon::RowResize);
    }

    #[test]
    fn drag_lifecycle_without_window() {
        let mut app = LivepaneApp::new(LivepaneConfig::default());
        let panel = PanelId::Editor(Language::Css);

        app.begin_drag(panel, 100.0);
        assert!(app.panels.is_dragging());
        assert_eq!(app.panels.active_listeners(), 1);

        app.drag_to(115.0);
        assert_eq!(app.panels.size(panel), 315.0);

        app.end_drag("test");
        assert!(!app.panels.is_dragging());
        assert_eq!(app.panels.active_listeners(), 0);

        // Moves after release change nothing; a second end is harmless.
        app.drag_to(400.0);
        assert_eq!(app.panels.size(panel), 315.0);
        app.end_drag("test");
    }

    #[test]
    fn dragging_below_zero_clamps_at_floor() {
        let mut app = LivepaneApp::new(LivepaneConfig::default());
        app.begin_drag(PanelId::Preview, 500.0);
        app.drag_to(0.0);
        assert_eq!(app.panels.size(PanelId::Preview), 0.0);
        app.end_drag("test");
    }
}
