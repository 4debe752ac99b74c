//! Editor theme name validation.

use crate::schema::LivepaneConfig;

use super::helpers::validate_identifier;

pub(crate) fn validate_editor(errors: &mut Vec<String>, config: &LivepaneConfig) {
    validate_identifier(errors, "editor.light_theme", &config.editor.light_theme);
    validate_identifier(errors, "editor.dark_theme", &config.editor.dark_theme);
}
