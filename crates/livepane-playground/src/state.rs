//! Top-level playground state owned by the app.

use livepane_common::{ColorMode, EditorMode, Language};
use livepane_config::schema::LivepaneConfig;

use crate::buffers::SourceBuffers;
use crate::compositor::composite;
use crate::editor::EditorOptions;
use crate::theme::ThemeState;

/// Mode, buffers, and theme for one playground session.
///
/// Nothing here is persisted; a new session starts from config defaults.
#[derive(Debug, Clone)]
pub struct Playground {
    mode: EditorMode,
    buffers: SourceBuffers,
    theme: ThemeState,
}

impl Playground {
    pub fn new(mode: EditorMode, buffers: SourceBuffers, theme: ThemeState) -> Self {
        Self {
            mode,
            buffers,
            theme,
        }
    }

    pub fn from_config(config: &LivepaneConfig) -> Self {
        Self::new(
            config.editor.initial_mode,
            SourceBuffers::from_snippets(&config.snippets),
            ThemeState::new(config.theme.initial, config.theme.clone(), &config.editor),
        )
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Change which panes are shown. Buffers are left untouched.
    ///
    /// Returns `true` if the mode actually changed.
    pub fn set_mode(&mut self, mode: EditorMode) -> bool {
        if self.mode == mode {
            return false;
        }
        tracing::debug!(from = %self.mode, to = %mode, "editor mode changed");
        self.mode = mode;
        true
    }

    pub fn buffers(&self) -> &SourceBuffers {
        &self.buffers
    }

    pub fn buffer(&self, language: Language) -> &str {
        self.buffers.get(language)
    }

    /// Store an editor's full new content, unconditionally.
    pub fn edit(&mut self, language: Language, content: impl Into<String>) {
        self.buffers.set(language, content);
    }

    /// The composite document for the current buffers.
    ///
    /// All three buffers are included even when a pane is hidden.
    pub fn document(&self) -> String {
        composite(self.buffers.html(), self.buffers.css(), self.buffers.js())
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn color_mode(&self) -> ColorMode {
        self.theme.mode()
    }

    pub fn toggle_color_mode(&mut self) -> ColorMode {
        let mode = self.theme.toggle();
        tracing::debug!(%mode, "color mode toggled");
        mode
    }

    pub fn editor_options(&self, language: Language) -> EditorOptions {
        EditorOptions::for_language(language, self.theme.editor_theme())
    }
}

impl Default for Playground {
    fn default() -> Self {
        Self::from_config(&LivepaneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_switch_round_trip_keeps_buffers() {
        let mut pg = Playground::default();
        pg.edit(Language::Html, "<p>hi</p>");
        pg.edit(Language::Css, "p { color: red }");
        pg.edit(Language::Js, "document.title = 'x';");
        let before = pg.buffers().clone();

        assert!(pg.set_mode(EditorMode::MarkupOnly));
        assert_eq!(pg.buffers(), &before);
        assert!(pg.set_mode(EditorMode::Full));
        assert_eq!(pg.buffers(), &before);
    }

    #[test]
    fn hidden_js_is_still_composited() {
        let mut pg = Playground::default();
        pg.edit(Language::Js, "window.hidden = true;");
        pg.set_mode(EditorMode::MarkupOnly);
        assert!(pg.document().contains("<script>window.hidden = true;</script>"));
    }

    #[test]
    fn set_same_mode_reports_no_change() {
        let mut pg = Playground::default();
        assert!(!pg.set_mode(EditorMode::Full));
    }

    #[test]
    fn every_edit_is_reflected_in_document() {
        let mut pg = Playground::default();
        for text in ["<h1>a</h1>", "<h1>ab</h1>", "<h1>abc</h1>"] {
            pg.edit(Language::Html, text);
            assert!(pg.document().contains(&format!("<body>{text}<script>")));
        }
    }

    #[test]
    fn editor_options_track_color_mode() {
        let mut pg = Playground::default();
        assert_eq!(pg.editor_options(Language::Css).theme, "eclipse");
        pg.toggle_color_mode();
        assert_eq!(pg.editor_options(Language::Css).theme, "dracula");
        assert_eq!(pg.editor_options(Language::Css).mode, "css");
        pg.toggle_color_mode();
        assert_eq!(pg.color_mode(), ColorMode::Light);
        assert_eq!(pg.editor_options(Language::Css).theme, "eclipse");
    }

    #[test]
    fn from_config_honours_initial_values() {
        let mut config = LivepaneConfig::default();
        config.editor.initial_mode = EditorMode::MarkupOnly;
        config.theme.initial = ColorMode::Dark;
        config.snippets.css = "body{}".into();
        let pg = Playground::from_config(&config);
        assert_eq!(pg.mode(), EditorMode::MarkupOnly);
        assert_eq!(pg.color_mode(), ColorMode::Dark);
        assert_eq!(pg.buffer(Language::Css), "body{}");
    }
}
