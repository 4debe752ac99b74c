//! Configuration schema types for Livepane.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod editor;
mod logging;
mod panels;
mod snippets;
mod theme;
mod window;

pub use editor::*;
pub use logging::*;
pub use panels::*;
pub use snippets::*;
pub use theme::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Livepane.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LivepaneConfig {
    pub window: WindowConfig,
    pub editor: EditorConfig,
    pub theme: ThemeConfig,
    pub panels: PanelsConfig,
    pub snippets: SnippetsConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use livepane_common::{ColorMode, EditorMode};

    #[test]
    fn empty_toml_yields_defaults() {
        let config: LivepaneConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Playground");
        assert_eq!(config.editor.initial_mode, EditorMode::Full);
        assert_eq!(config.theme.initial, ColorMode::Light);
        assert_eq!(config.panels.default_height, 300.0);
        assert_eq!(config.panels.handle_height, 10.0);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: LivepaneConfig = toml::from_str(
            r##"
[editor]
initial_mode = "html-css"

[theme]
initial = "dark"

[theme.dark]
navbar_bg = "#101010"
"##,
        )
        .unwrap();
        assert_eq!(config.editor.initial_mode, EditorMode::MarkupOnly);
        assert_eq!(config.theme.initial, ColorMode::Dark);
        assert_eq!(config.theme.dark.navbar_bg, "#101010");
        assert_eq!(config.theme.dark.navbar_text, "#FFFFFF");
        assert_eq!(config.theme.light.navbar_bg, "#EDF2F7");
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let result: Result<LivepaneConfig, _> =
            toml::from_str("[editor]\ninitial_mode = \"js-only\"\n");
        assert!(result.is_err());
    }
}
