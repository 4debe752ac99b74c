/// How much of the host a WebView's page may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Isolation {
    /// Bundled pane pages: IPC bridge and `livepane://` protocol attached.
    #[default]
    Trusted,
    /// User-authored content: no IPC bridge, no custom protocol, no
    /// clipboard, incognito storage, navigation limited to `about:`.
    Sandboxed,
}

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    pub isolation: Isolation,
    /// Background color painted before the page draws.
    pub background: Option<(u8, u8, u8, u8)>,
    /// Whether the WebView starts visible.
    pub visible: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            devtools: cfg!(debug_assertions),
            clipboard: true,
            isolation: Isolation::Trusted,
            background: None,
            visible: true,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a sandboxed config that renders inline HTML.
    pub fn sandboxed(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            clipboard: false,
            isolation: Isolation::Sandboxed,
            ..Default::default()
        }
    }

    pub fn background(mut self, rgba: (u8, u8, u8, u8)) -> Self {
        self.background = Some(rgba);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}
