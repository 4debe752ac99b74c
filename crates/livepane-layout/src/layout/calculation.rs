//! Layout calculation: chrome strips, editor column, preview column.

use livepane_common::{EditorMode, Rect};

use crate::panel::PanelId;
use crate::stack::PanelStack;

use super::{LayoutEngine, PanelRect, WindowLayout};

impl LayoutEngine {
    pub fn compute(&self, stack: &PanelStack, mode: EditorMode, viewport: Rect) -> WindowLayout {
        let width = viewport.width.max(0.0);
        let height = viewport.height.max(0.0);

        let toolbar_h = self.toolbar_height.min(height);
        let footer_h = self.footer_height.min(height - toolbar_h).max(0.0);
        let toolbar = Rect {
            x: viewport.x,
            y: viewport.y,
            width,
            height: toolbar_h,
        };
        let footer = Rect {
            x: viewport.x,
            y: viewport.y + height - footer_h,
            width,
            height: footer_h,
        };

        let body_top = toolbar.bottom();
        let body_bottom = footer.y;

        let column_w = ((width - self.column_gap) / 2.0)
            .max(self.editor_column_min_width)
            .min(width)
            .max(0.0);
        let preview_x = viewport.x + column_w + self.column_gap;
        let preview_w = (width - column_w - self.column_gap).max(0.0);

        let mut panels = Vec::new();
        let mut y = body_top;
        for lang in mode.visible_languages() {
            let id = PanelId::Editor(*lang);
            let outer = Rect {
                x: viewport.x,
                y,
                width: column_w,
                height: self.outer_height(stack.size(id)),
            };
            y += outer.height;
            panels.push(self.split(id, outer, body_bottom));
        }

        let preview = Rect {
            x: preview_x,
            y: body_top,
            width: preview_w,
            height: self.outer_height(stack.size(PanelId::Preview)),
        };
        panels.push(self.split(PanelId::Preview, preview, body_bottom));

        WindowLayout {
            toolbar,
            footer,
            panels,
        }
    }

    /// A collapsed panel still keeps its handle strip on screen.
    fn outer_height(&self, size: f64) -> f64 {
        size.max(self.handle_height)
    }

    /// Carve the handle strip off the bottom of `outer` and clip both parts
    /// to `limit` so nothing overlaps the footer.
    fn split(&self, id: PanelId, outer: Rect, limit: f64) -> PanelRect {
        let handle_h = self.handle_height.min(outer.height).max(0.0);
        let content = Rect {
            height: (outer.height - handle_h).max(0.0),
            ..outer
        };
        let handle = Rect {
            y: content.bottom(),
            height: handle_h,
            ..outer
        };
        PanelRect {
            id,
            outer,
            content: clip_bottom(content, limit),
            handle: clip_bottom(handle, limit),
        }
    }
}

fn clip_bottom(rect: Rect, limit: f64) -> Rect {
    let y = rect.y.min(limit);
    Rect {
        y,
        height: (rect.bottom().min(limit) - y).max(0.0),
        ..rect
    }
}
