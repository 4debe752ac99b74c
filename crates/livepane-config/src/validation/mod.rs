//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod editor;
mod helpers;
mod panels;
mod theme;
mod window;


use crate::schema::LivepaneConfig;
use livepane_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LivepaneConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    editor::validate_editor(&mut errors, config);
    theme::validate_theme(&mut errors, config);
    panels::validate_panels(&mut errors, config);

    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
