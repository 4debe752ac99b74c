//! Light/dark chrome palettes.

use livepane_common::ColorMode;
use serde::{Deserialize, Serialize};

/// Theme selection and the two palettes it switches between.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color mode at startup.
    pub initial: ColorMode,
    pub light: PaletteConfig,
    pub dark: PaletteConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            initial: ColorMode::Light,
            light: PaletteConfig::light(),
            dark: PaletteConfig::dark(),
        }
    }
}

impl ThemeConfig {
    pub fn palette(&self, mode: ColorMode) -> &PaletteConfig {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// Chrome colors for one color mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub navbar_bg: String,
    pub navbar_text: String,
    pub border: String,
    pub panel_border: String,
    pub handle: String,
    pub preview_bg: String,
}

impl PaletteConfig {
    pub fn light() -> Self {
        Self {
            navbar_bg: "#EDF2F7".into(),
            navbar_text: "#000000".into(),
            border: "#E2E8F0".into(),
            panel_border: "#808080".into(),
            handle: "#E2E8F0".into(),
            preview_bg: "#FFFFFF".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            navbar_bg: "#1A202C".into(),
            navbar_text: "#FFFFFF".into(),
            border: "#4A5568".into(),
            panel_border: "#808080".into(),
            handle: "#4A5568".into(),
            preview_bg: "#FFFFFF".into(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self::light()
    }
}
