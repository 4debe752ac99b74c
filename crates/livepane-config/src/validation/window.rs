//! Window geometry validation.

use crate::schema::LivepaneConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &LivepaneConfig) {
    let w = &config.window;
    validate_range(errors, "window.width", w.width, 320, 16384);
    validate_range(errors, "window.height", w.height, 240, 16384);
    validate_range(errors, "window.toolbar_height", w.toolbar_height, 24, 200);
    validate_range(errors, "window.footer_height", w.footer_height, 0, 200);
    if w.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
}
