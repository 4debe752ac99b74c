//! Preview refresh: composite, wrap in the sandbox shell, reload.

use livepane_common::Color;
use livepane_webview::sandbox_document;

use crate::app_state::core::LivepaneApp;
use crate::app_state::types::PaneSlot;

const WHITE: (u8, u8, u8, u8) = (0xFF, 0xFF, 0xFF, 0xFF);

impl LivepaneApp {
    /// The sandbox shell page for the current buffers.
    pub(in crate::app_state) fn preview_html(&self) -> String {
        let palette = self.playground.theme().palette();
        sandbox_document(&self.playground.document(), &palette.preview_bg)
    }

    pub(in crate::app_state) fn preview_background(&self) -> (u8, u8, u8, u8) {
        let palette = self.playground.theme().palette();
        Color::from_hex(&palette.preview_bg)
            .map(|c| c.as_tuple())
            .unwrap_or(WHITE)
    }

    /// Reload the preview with the current document.
    ///
    /// Every call is a fresh navigation, so the document's scripts run
    /// again even if its text is unchanged.
    pub(in crate::app_state) fn refresh_preview(&self) {
        let html = self.preview_html();
        let Some(handle) = self
            .webviews
            .as_ref()
            .and_then(|r| r.get(PaneSlot::Preview.id()))
        else {
            return;
        };
        if let Err(e) = handle.load_html(&html) {
            tracing::warn!(error = %e, "failed to reload preview");
        } else {
            tracing::trace!(len = html.len(), "preview reloaded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livepane_common::Language;
    use livepane_config::LivepaneConfig;

    #[test]
    fn preview_html_embeds_the_escaped_document() {
        let mut app = LivepaneApp::new(LivepaneConfig::default());
        app.playground.edit(Language::Html, "<p class=\"x\">hi</p>");
        let html = app.preview_html();
        assert!(html.contains("sandbox=\"allow-scripts\""));
        assert!(html.contains("&lt;p class=&quot;x&quot;&gt;hi&lt;/p&gt;"));
        assert!(html.contains("h1 { color: blue; }"));
    }

    #[test]
    fn preview_background_defaults_to_white() {
        let app = LivepaneApp::new(LivepaneConfig::default());
        assert_eq!(app.preview_background(), WHITE);
    }
}
