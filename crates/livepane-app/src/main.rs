mod app_state;
mod cli;

use std::process::ExitCode;

use livepane_common::{ColorMode, ConfigError};
use livepane_config::LivepaneConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "livepane=info";

fn load_config(args: &cli::Args) -> Result<LivepaneConfig, ConfigError> {
    match &args.config {
        Some(path) => livepane_config::load_config_from(path),
        None => livepane_config::load_config(),
    }
}

/// Build the filter for a comma-separated directive list such as
/// `livepane=debug,wry=warn`.
fn log_filter(directives: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directives)
}

fn init_logging(directives: &str) {
    let filter = log_filter(directives).unwrap_or_else(|e| {
        eprintln!("invalid log filter '{directives}' ({e}), using {DEFAULT_LOG_DIRECTIVE}");
        EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Logging needs the config's level, so the load result is reported
    // after the subscriber is up.
    let loaded = load_config(&args);
    let directive = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    init_logging(&directive);

    tracing::info!("Livepane v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!(path = %path.display(), "using config override");
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        LivepaneConfig::default()
    });

    if let Some(mode) = args.mode {
        config.editor.initial_mode = mode;
    }
    if args.dark {
        config.theme.initial = ColorMode::Dark;
    }
    if args.print_config {
        println!("{}", livepane_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    tracing::info!(
        mode = %config.editor.initial_mode,
        theme = %config.theme.initial,
        "config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!(error = %e, "failed to create event loop");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::LivepaneApp::new(config);

    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!(error = %e, "event loop error");
        return ExitCode::FAILURE;
    }
    tracing::info!("shutdown complete");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn log_filter_accepts_directive_lists() {
        let filter = log_filter("livepane=debug,wry=warn").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn log_filter_accepts_default_and_bare_level() {
        assert!(log_filter(DEFAULT_LOG_DIRECTIVE).is_ok());
        assert_eq!(
            log_filter("trace").unwrap().max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn log_filter_rejects_bad_level() {
        assert!(log_filter("livepane=loud").is_err());
    }
}
