//! Handle hit testing for drag-resize.

use crate::panel::PanelId;

use super::WindowLayout;

/// Find the panel whose drag handle contains `(x, y)`.
///
/// Handles clipped away below the body have zero height and never match.
pub fn hit_test_handle(layout: &WindowLayout, x: f64, y: f64) -> Option<PanelId> {
    layout
        .panels
        .iter()
        .find(|p| p.handle.height > 0.0 && p.handle.contains(x, y))
        .map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEngine;
    use crate::stack::PanelStack;
    use livepane_common::{EditorMode, Language, Rect};

    fn layout() -> WindowLayout {
        let engine = LayoutEngine {
            toolbar_height: 70.0,
            footer_height: 50.0,
            handle_height: 10.0,
            column_gap: 8.0,
            editor_column_min_width: 300.0,
        };
        let stack = PanelStack::new(200.0, 0.0);
        let viewport = Rect {
            x: 0.0,
            y: 0.0,
            width: 1000.0,
            height: 800.0,
        };
        engine.compute(&stack, EditorMode::Full, viewport)
    }

    #[test]
    fn hit_on_html_handle() {
        // HTML panel spans y 70..270, handle 260..270.
        assert_eq!(
            hit_test_handle(&layout(), 100.0, 265.0),
            Some(PanelId::Editor(Language::Html))
        );
    }

    #[test]
    fn hit_on_preview_handle() {
        assert_eq!(hit_test_handle(&layout(), 800.0, 262.0), Some(PanelId::Preview));
    }

    #[test]
    fn miss_inside_content() {
        assert_eq!(hit_test_handle(&layout(), 100.0, 150.0), None);
    }

    #[test]
    fn miss_in_column_gap() {
        assert_eq!(hit_test_handle(&layout(), 499.0, 265.0), None);
    }
}
