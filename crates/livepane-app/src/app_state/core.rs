//! LivepaneApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use livepane_common::Rect;
use livepane_config::LivepaneConfig;
use livepane_layout::{LayoutEngine, PanelStack, WindowLayout};
use livepane_playground::Playground;
use livepane_renderer::Backdrop;
use livepane_webview::WebViewRegistry;

use super::resize_drag::CursorZone;

/// Top-level application state.
pub struct LivepaneApp {
    pub(super) config: LivepaneConfig,
    pub(super) playground: Playground,

    // Panel sizes, drag state, and the last computed placement
    pub(super) panels: PanelStack,
    pub(super) engine: LayoutEngine,
    pub(super) layout: WindowLayout,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) backdrop: Option<Backdrop>,
    pub(super) webviews: Option<WebViewRegistry>,

    /// Last cursor position over the native window, logical pixels.
    pub(super) cursor_pos: (f64, f64),
    pub(super) cursor_zone: CursorZone,

    pub(super) should_exit: bool,
}

impl LivepaneApp {
    pub fn new(config: LivepaneConfig) -> Self {
        let playground = Playground::from_config(&config);
        let panels = PanelStack::from_config(&config.panels);
        let engine = LayoutEngine::from_config(&config.window, &config.panels);
        let layout = engine.compute(&panels, playground.mode(), Rect::ZERO);
        Self {
            config,
            playground,
            panels,
            engine,
            layout,
            window: None,
            backdrop: None,
            webviews: None,
            cursor_pos: (0.0, 0.0),
            cursor_zone: CursorZone::None,
            should_exit: false,
        }
    }

    /// The window's content area in logical pixels.
    pub(super) fn viewport(&self) -> Rect {
        match &self.window {
            Some(w) => {
                let size = w.inner_size().to_logical::<f64>(w.scale_factor());
                Rect {
                    x: 0.0,
                    y: 0.0,
                    width: size.width,
                    height: size.height,
                }
            }
            None => Rect::ZERO,
        }
    }

    /// Recompute placement from panel sizes and mode, then move the webviews.
    pub(super) fn relayout(&mut self) {
        self.layout = self
            .engine
            .compute(&self.panels, self.playground.mode(), self.viewport());
        self.sync_webview_bounds();
        self.request_redraw();
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}
