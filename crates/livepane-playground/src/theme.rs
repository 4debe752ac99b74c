//! Color mode and everything derived from it.

use livepane_common::ColorMode;
use livepane_config::schema::{EditorConfig, PaletteConfig, ThemeConfig};

/// Chrome colors for the current color mode.
pub type ChromePalette = PaletteConfig;

/// Current color mode plus the values it selects between.
#[derive(Debug, Clone)]
pub struct ThemeState {
    mode: ColorMode,
    palettes: ThemeConfig,
    light_editor_theme: String,
    dark_editor_theme: String,
}

impl ThemeState {
    pub fn new(mode: ColorMode, palettes: ThemeConfig, editor: &EditorConfig) -> Self {
        Self {
            mode,
            palettes,
            light_editor_theme: editor.light_theme.clone(),
            dark_editor_theme: editor.dark_theme.clone(),
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Flip light/dark and return the new mode.
    pub fn toggle(&mut self) -> ColorMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Syntax theme name handed to every editor pane.
    pub fn editor_theme(&self) -> &str {
        match self.mode {
            ColorMode::Dark => &self.dark_editor_theme,
            ColorMode::Light => &self.light_editor_theme,
        }
    }

    pub fn palette(&self) -> &ChromePalette {
        self.palettes.palette(self.mode)
    }

    /// Text of the theme toggle button, naming the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            ColorMode::Light => "Switch to Dark Mode",
            ColorMode::Dark => "Switch to Light Mode",
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(
            ColorMode::Light,
            ThemeConfig::default(),
            &EditorConfig::default(),
        )
    }
}
