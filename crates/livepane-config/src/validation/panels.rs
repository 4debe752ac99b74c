//! Panel geometry validation.

use crate::schema::LivepaneConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_panels(errors: &mut Vec<String>, config: &LivepaneConfig) {
    let p = &config.panels;
    validate_range_f64(errors, "panels.default_height", p.default_height, 20.0, 4000.0);
    validate_range_f64(errors, "panels.handle_height", p.handle_height, 2.0, 64.0);
    validate_range_f64(errors, "panels.min_height", p.min_height, 0.0, p.default_height);
    validate_range_f64(
        errors,
        "panels.editor_column_min_width",
        p.editor_column_min_width,
        100.0,
        4000.0,
    );
    validate_range_f64(errors, "panels.column_gap", p.column_gap, 0.0, 64.0);
}
