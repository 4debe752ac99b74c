use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Host platform failures: the native window or a pane webview.
#[derive(Debug, thiserror::Error)]
pub enum LivepaneError {
    #[error("webview error: {0}")]
    WebView(String),

    #[error("window error: {0}")]
    Window(String),
}
