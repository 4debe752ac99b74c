//! `ApplicationHandler` implementation for the winit event loop.

use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use super::core::LivepaneApp;
use super::resize_drag::CursorZone;

/// How often webview events are drained while the window is idle.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl ApplicationHandler for LivepaneApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!(error = %e, "initialization failed");
            event_loop.exit();
            return;
        }

        self.relayout();
        self.create_panes();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut backdrop) = self.backdrop {
                        backdrop.resize(size.width, size.height);
                    }
                    self.relayout();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.relayout();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                let logical = position.to_logical::<f64>(scale);
                self.handle_cursor_moved(logical.x, logical.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.handle_cursor_left();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::Focused(false) => {
                self.end_drag("focus lost");
            }

            WindowEvent::RedrawRequested => {
                if let Some(ref mut backdrop) = self.backdrop {
                    if let Err(e) = backdrop.render() {
                        tracing::error!(error = %e, "backdrop render failed");
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_webview_events();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl LivepaneApp {
    /// Cursor moved over the native window (handle strips and gaps).
    fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_pos = (x, y);
        if self.panels.is_dragging() {
            self.drag_to(y);
        } else {
            self.update_hover(x, y);
        }
    }

    /// The cursor left the native surface, for the outside or for a child
    /// webview. A drag keeps going: it ends on release, on focus loss, or on
    /// a forwarded move that reports no held button.
    pub(super) fn handle_cursor_left(&mut self) {
        if !self.panels.is_dragging() {
            self.set_cursor_zone(CursorZone::None);
        }
    }

    fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        match state {
            ElementState::Pressed => {
                let (x, y) = self.cursor_pos;
                if let Some(panel) = livepane_layout::hit_test_handle(&self.layout, x, y) {
                    self.begin_drag(panel, y);
                }
            }
            ElementState::Released => {
                self.end_drag("button released");
            }
        }
    }

    /// Release the drag and tear down every webview.
    pub(super) fn shutdown(&mut self) {
        if self.should_exit {
            return;
        }
        self.should_exit = true;
        self.end_drag("shutdown");
        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        tracing::info!("webviews destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livepane_common::Language;
    use livepane_config::LivepaneConfig;
    use livepane_layout::PanelId;

    #[test]
    fn drag_survives_cursor_leaving_the_window() {
        let mut app = LivepaneApp::new(LivepaneConfig::default());
        let panel = PanelId::Editor(Language::Html);
        app.begin_drag(panel, 300.0);

        app.handle_cursor_moved(0.0, 0.0);
        app.handle_cursor_left();
        assert!(app.panels.is_dragging());
        assert_eq!(app.panels.active_listeners(), 1);

        app.handle_cursor_moved(10.0, 350.0);
        assert_eq!(app.panels.size(panel), 350.0);

        app.handle_mouse_input(ElementState::Released, MouseButton::Left);
        assert!(!app.panels.is_dragging());
        assert_eq!(app.panels.active_listeners(), 0);
    }

    #[test]
    fn cursor_left_without_drag_resets_cursor() {
        let mut app = LivepaneApp::new(LivepaneConfig::default());
        app.cursor_zone = CursorZone::RowResize;
        app.handle_cursor_left();
        assert_eq!(app.cursor_zone, CursorZone::None);
    }
}
