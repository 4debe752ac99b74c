//! Coordinate conversion between layout rects and wry rects.

use livepane_common::Rect;

/// Convert a layout `Rect` (logical pixels) to a wry `Rect`.
///
/// Fractional sizes from panel drags are kept; wry rounds at the platform
/// boundary.
pub fn layout_rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            rect.width.max(0.0),
            rect.height.max(0.0),
        )),
    }
}
