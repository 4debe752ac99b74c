//! Theme propagation: chrome palette, editor themes, toolbar and footer state.

use chrono::Datelike;
use serde_json::json;

use livepane_common::{EditorMode, Language};
use livepane_playground::ChromePalette;
use livepane_webview::ThemeVariables;

use crate::app_state::core::LivepaneApp;
use crate::app_state::types::PaneSlot;

// =============================================================================
// PAYLOAD BUILDERS
// =============================================================================

/// CSS custom properties for the chrome panes.
pub fn palette_variables(palette: &ChromePalette, toolbar_height: u32) -> ThemeVariables {
    ThemeVariables::new()
        .color("--navbar-bg", &palette.navbar_bg)
        .color("--navbar-text", &palette.navbar_text)
        .color("--border", &palette.border)
        .color("--panel-border", &palette.panel_border)
        .color("--handle", &palette.handle)
        .color("--preview-bg", &palette.preview_bg)
        .length("--toolbar-height", &format!("{toolbar_height}px"))
}

pub fn mode_options() -> serde_json::Value {
    EditorMode::ALL
        .iter()
        .map(|m| json!({ "value": m.as_str(), "label": m.display_name() }))
        .collect()
}

// =============================================================================
// PUSHES
// =============================================================================

impl LivepaneApp {
    fn theme_script(&self) -> String {
        palette_variables(
            self.playground.theme().palette(),
            self.config.window.toolbar_height,
        )
        .to_injection_js()
    }

    /// Apply the current color mode everywhere: pane CSS variables, editor
    /// themes, the toolbar button, and the native backdrop.
    pub(in crate::app_state) fn apply_theme(&mut self) {
        let script = self.theme_script();
        for slot in PaneSlot::ALL.into_iter().filter(|s| s.is_trusted()) {
            self.eval_in(slot, &script);
        }
        for language in Language::ALL {
            self.push_editor_config(language);
        }
        self.push_toolbar_state();

        let color = self.backdrop_color();
        if let Some(ref mut backdrop) = self.backdrop {
            backdrop.set_color(color);
        }
        let preview_bg = self.preview_background();
        if let Some(handle) = self
            .webviews
            .as_ref()
            .and_then(|r| r.get(PaneSlot::Preview.id()))
        {
            if let Err(e) = handle.set_background(preview_bg) {
                tracing::warn!(error = %e, "failed to set preview background");
            }
        }
        self.request_redraw();
        tracing::info!(mode = %self.playground.color_mode(), "theme applied");
    }

    /// Inject the palette into one pane, e.g. after its page reports ready.
    pub(in crate::app_state) fn inject_theme(&self, slot: PaneSlot) {
        self.eval_in(slot, &self.theme_script());
    }

    pub(in crate::app_state) fn editor_config_payload(&self, language: Language) -> serde_json::Value {
        json!({
            "language": language.as_str(),
            "label": language.label(),
            "options": self.playground.editor_options(language),
        })
    }

    pub(in crate::app_state) fn push_editor_config(&self, language: Language) {
        let payload = self.editor_config_payload(language);
        self.send_to(PaneSlot::Editor(language), "editor_config", &payload);
    }

    pub(in crate::app_state) fn toolbar_state_payload(&self) -> serde_json::Value {
        let theme = self.playground.theme();
        json!({
            "title": self.config.window.title,
            "mode": self.playground.mode().as_str(),
            "modes": mode_options(),
            "colorMode": theme.mode().as_str(),
            "toggleLabel": theme.toggle_label(),
        })
    }

    pub(in crate::app_state) fn push_toolbar_state(&self) {
        let payload = self.toolbar_state_payload();
        self.send_to(PaneSlot::Toolbar, "toolbar_state", &payload);
    }

    pub(in crate::app_state) fn footer_state_payload(&self) -> serde_json::Value {
        json!({
            "year": chrono::Local::now().year(),
            "owner": self.config.window.footer_owner,
        })
    }

    pub(in crate::app_state) fn push_footer_state(&self) {
        let payload = self.footer_state_payload();
        self.send_to(PaneSlot::Footer, "footer_state", &payload);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use livepane_config::schema::ThemeConfig;
    use livepane_config::LivepaneConfig;

    #[test]
    fn palette_variables_cover_every_entry() {
        let vars = palette_variables(&ThemeConfig::default().dark, 72);
        let css = vars.to_root_css();
        assert!(css.contains("--navbar-bg: #1A202C;"));
        assert!(css.contains("--navbar-text: #FFFFFF;"));
        assert!(css.contains("--border: #4A5568;"));
        assert!(css.contains("--panel-border: #808080;"));
        assert!(css.contains("--handle: #4A5568;"));
        assert!(css.contains("--preview-bg: #FFFFFF;"));
        assert!(css.contains("--toolbar-height: 72px;"));
        assert_eq!(vars.vars().len(), 7);
    }

    #[test]
    fn hostile_palette_entry_is_dropped() {
        let mut palette = ThemeConfig::default().light;
        palette.navbar_bg = "#fff;}</style><script>alert(1)</script>".into();
        let vars = palette_variables(&palette, 72);
        assert_eq!(vars.vars().len(), 6);
        assert!(!vars.to_injection_js().contains("script"));
    }

    #[test]
    fn mode_options_list_both_modes() {
        let options = mode_options();
        assert_eq!(options[0]["value"], "html-css-js");
        assert_eq!(options[1]["value"], "html-css");
        assert_eq!(options.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn toolbar_state_reflects_mode_and_theme() {
        let mut app = LivepaneApp::new(LivepaneConfig::default());
        let state = app.toolbar_state_payload();
        assert_eq!(state["title"], "Playground");
        assert_eq!(state["mode"], "html-css-js");
        assert_eq!(state["colorMode"], "light");
        assert_eq!(state["toggleLabel"], "Switch to Dark Mode");

        app.playground.toggle_color_mode();
        app.playground.set_mode(EditorMode::MarkupOnly);
        let state = app.toolbar_state_payload();
        assert_eq!(state["mode"], "html-css");
        assert_eq!(state["colorMode"], "dark");
        assert_eq!(state["toggleLabel"], "Switch to Light Mode");
    }

    #[test]
    fn editor_config_follows_color_mode() {
        let mut app = LivepaneApp::new(LivepaneConfig::default());
        let cfg = app.editor_config_payload(Language::Js);
        assert_eq!(cfg["label"], "JavaScript");
        assert_eq!(cfg["options"]["mode"], "javascript");
        assert_eq!(cfg["options"]["theme"], "eclipse");
        assert_eq!(cfg["options"]["lineNumbers"], true);

        app.playground.toggle_color_mode();
        let cfg = app.editor_config_payload(Language::Js);
        assert_eq!(cfg["options"]["theme"], "dracula");
    }

    #[test]
    fn footer_state_has_owner_and_year() {
        let app = LivepaneApp::new(LivepaneConfig::default());
        let state = app.footer_state_payload();
        assert_eq!(state["owner"], "Livepane");
        assert!(state["year"].as_i64().unwrap_or(0) >= 2024);
    }

    #[test]
    fn apply_theme_headless_is_harmless() {
        let mut app = LivepaneApp::new(LivepaneConfig::default());
        app.playground.toggle_color_mode();
        app.apply_theme();
        assert!(app.playground.color_mode().is_dark());
    }
}
