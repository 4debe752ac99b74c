//! Window creation, backdrop renderer, and webview registry setup.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use livepane_common::{Color, LivepaneError, Result};
use livepane_renderer::Backdrop;
use livepane_webview::{ContentProvider, WebViewRegistry};

use super::core::LivepaneApp;

// =============================================================================
// BUNDLED PAGES
// =============================================================================

const EDITOR_PAGE: &str = include_str!("../../assets/panels/editor/index.html");
const TOOLBAR_PAGE: &str = include_str!("../../assets/panels/toolbar/index.html");
const FOOTER_PAGE: &str = include_str!("../../assets/panels/footer/index.html");
const SHARED_CSS: &str = include_str!("../../assets/panels/shared/panel.css");

/// Content provider serving the pane pages compiled into the binary.
pub(super) fn bundled_content() -> ContentProvider {
    let mut provider = ContentProvider::new();
    provider.add_asset("editor/index.html", EDITOR_PAGE);
    provider.add_asset("toolbar/index.html", TOOLBAR_PAGE);
    provider.add_asset("footer/index.html", FOOTER_PAGE);
    provider.add_asset("shared/panel.css", SHARED_CSS);
    provider
}

/// Fallback for a palette color that fails to parse.
const FALLBACK_HANDLE: Color = Color {
    r: 0x80,
    g: 0x80,
    b: 0x80,
    a: 0xFF,
};

// =============================================================================
// INITIALIZATION
// =============================================================================

impl LivepaneApp {
    /// Create the window, the backdrop renderer and the webview registry.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<()> {
        let win = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(win.title.clone())
            .with_inner_size(LogicalSize::new(win.width as f64, win.height as f64))
            .with_min_inner_size(LogicalSize::new(320.0, 240.0));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| LivepaneError::Window(e.to_string()))?;

        // The window still works without a backdrop; only the handle strips
        // go unpainted.
        match pollster::block_on(Backdrop::new(window.clone(), self.backdrop_color())) {
            Ok(backdrop) => self.backdrop = Some(backdrop),
            Err(e) => tracing::warn!(error = %e, "backdrop renderer unavailable"),
        }

        self.webviews = Some(WebViewRegistry::with_content(bundled_content()));
        self.window = Some(window);
        tracing::info!("window created");
        Ok(())
    }

    /// Color painted behind the webviews, visible in the handle strips.
    pub(super) fn backdrop_color(&self) -> Color {
        let palette = self.playground.theme().palette();
        Color::from_hex(&palette.handle).unwrap_or_else(|| {
            tracing::warn!(color = %palette.handle, "unparseable handle color");
            FALLBACK_HANDLE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livepane_config::LivepaneConfig;

    #[test]
    fn bundled_pages_resolve() {
        let provider = bundled_content();
        for path in [
            "editor/index.html?lang=css",
            "toolbar/index.html",
            "footer/index.html",
            "shared/panel.css",
        ] {
            let (mime, data) = provider.resolve(path).unwrap();
            assert!(mime.starts_with("text/"), "{path}: {mime}");
            assert!(!data.is_empty(), "{path}");
        }
    }

    #[test]
    fn pages_talk_to_the_ipc_bridge() {
        assert!(EDITOR_PAGE.contains("buffer_changed"));
        assert!(EDITOR_PAGE.contains("editor_ready"));
        assert!(TOOLBAR_PAGE.contains("set_mode"));
        assert!(TOOLBAR_PAGE.contains("toggle_theme"));
        assert!(FOOTER_PAGE.contains("footer_ready"));
    }

    #[test]
    fn backdrop_color_tracks_theme() {
        let mut app = LivepaneApp::new(LivepaneConfig::default());
        assert_eq!(app.backdrop_color(), Color::from_hex("#E2E8F0").unwrap());
        app.playground.toggle_color_mode();
        assert_eq!(app.backdrop_color(), Color::from_hex("#4A5568").unwrap());
    }
}
