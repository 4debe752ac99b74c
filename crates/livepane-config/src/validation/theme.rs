//! Palette color validation for both color modes.

use crate::schema::{LivepaneConfig, PaletteConfig};

use super::helpers::validate_color;

pub(crate) fn validate_theme(errors: &mut Vec<String>, config: &LivepaneConfig) {
    validate_palette(errors, "theme.light", &config.theme.light);
    validate_palette(errors, "theme.dark", &config.theme.dark);
}

fn validate_palette(errors: &mut Vec<String>, prefix: &str, p: &PaletteConfig) {
    validate_color(errors, &format!("{prefix}.navbar_bg"), &p.navbar_bg);
    validate_color(errors, &format!("{prefix}.navbar_text"), &p.navbar_text);
    validate_color(errors, &format!("{prefix}.border"), &p.border);
    validate_color(errors, &format!("{prefix}.panel_border"), &p.panel_border);
    validate_color(errors, &format!("{prefix}.handle"), &p.handle);
    validate_color(errors, &format!("{prefix}.preview_bg"), &p.preview_bg);
}
