//! The full set of resizable panels plus the drag state that drives them.

use std::collections::BTreeMap;

use livepane_config::schema::PanelsConfig;

use crate::gesture::PointerCapture;
use crate::panel::{PanelId, ResizablePanel};

/// All panels in the window, each with an independent height.
#[derive(Debug)]
pub struct PanelStack {
    panels: BTreeMap<PanelId, ResizablePanel>,
    capture: PointerCapture,
}

impl PanelStack {
    /// Create every panel at `default_height`, floored at `min_height`.
    pub fn new(default_height: f64, min_height: f64) -> Self {
        let panels = PanelId::ALL
            .iter()
            .map(|id| (*id, ResizablePanel::new(default_height, min_height)))
            .collect();
        Self {
            panels,
            capture: PointerCapture::new(),
        }
    }

    pub fn from_config(config: &PanelsConfig) -> Self {
        Self::new(config.default_height, config.min_height)
    }

    pub fn size(&self, id: PanelId) -> f64 {
        self.panels.get(&id).map(ResizablePanel::size).unwrap_or(0.0)
    }

    pub fn panel(&self, id: PanelId) -> Option<&ResizablePanel> {
        self.panels.get(&id)
    }

    /// Pointer pressed on `id`'s handle at vertical position `y`.
    pub fn pointer_down(&mut self, id: PanelId, y: f64) {
        let start_size = self.size(id);
        self.capture.begin(id, y, start_size);
    }

    /// Pointer moved to `y`. Returns the resized panel, if a drag is active.
    pub fn pointer_move(&mut self, y: f64) -> Option<PanelId> {
        let (id, target) = self.capture.on_move(y)?;
        let panel = self.panels.get_mut(&id)?;
        panel.set_size(target);
        Some(id)
    }

    /// Pointer released. Returns the panel whose gesture ended.
    pub fn pointer_up(&mut self) -> Option<PanelId> {
        self.capture.end()
    }

    pub fn is_dragging(&self) -> bool {
        self.capture.is_dragging()
    }

    pub fn dragging_panel(&self) -> Option<PanelId> {
        self.capture.gesture().map(|g| g.panel())
    }

    pub fn active_listeners(&self) -> usize {
        self.capture.listeners().active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livepane_common::Language;

    const HTML: PanelId = PanelId::Editor(Language::Html);
    const CSS: PanelId = PanelId::Editor(Language::Css);

    #[test]
    fn drag_sequence_ends_at_315() {
        let mut stack = PanelStack::new(300.0, 0.0);
        stack.pointer_down(HTML, 200.0);
        stack.pointer_move(210.0);
        stack.pointer_move(215.0);
        stack.pointer_up();
        assert_eq!(stack.size(HTML), 315.0);
    }

    #[test]
    fn moves_after_pointer_up_do_nothing() {
        let mut stack = PanelStack::new(300.0, 0.0);
        stack.pointer_down(HTML, 0.0);
        stack.pointer_move(20.0);
        stack.pointer_up();
        assert_eq!(stack.active_listeners(), 0);
        assert_eq!(stack.pointer_move(500.0), None);
        assert_eq!(stack.size(HTML), 320.0);
    }

    #[test]
    fn panels_resize_independently() {
        let mut stack = PanelStack::new(300.0, 0.0);
        stack.pointer_down(CSS, 100.0);
        stack.pointer_move(50.0);
        stack.pointer_up();
        assert_eq!(stack.size(CSS), 250.0);
        assert_eq!(stack.size(HTML), 300.0);
        assert_eq!(stack.size(PanelId::Preview), 300.0);
    }

    #[test]
    fn dragging_past_top_clamps_to_floor() {
        let mut stack = PanelStack::new(300.0, 0.0);
        stack.pointer_down(HTML, 400.0);
        stack.pointer_move(0.0);
        assert_eq!(stack.size(HTML), 0.0);
        // Dragging back down recovers from the drag-start size, not the clamp.
        stack.pointer_move(350.0);
        assert_eq!(stack.size(HTML), 250.0);
        stack.pointer_up();
    }

    #[test]
    fn second_gesture_starts_from_resting_size() {
        let mut stack = PanelStack::new(300.0, 0.0);
        stack.pointer_down(HTML, 0.0);
        stack.pointer_move(15.0);
        stack.pointer_up();
        stack.pointer_down(HTML, 100.0);
        stack.pointer_move(110.0);
        stack.pointer_up();
        assert_eq!(stack.size(HTML), 325.0);
    }

    #[test]
    fn from_config_uses_defaults() {
        let stack = PanelStack::from_config(&PanelsConfig::default());
        for id in PanelId::ALL {
            assert_eq!(stack.size(id), 300.0);
        }
        assert!(!stack.is_dragging());
    }
}
