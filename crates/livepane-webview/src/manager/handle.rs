use wry::WebView;

use super::types::Isolation;

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) isolation: Isolation,
}

impl WebViewHandle {
    /// Load raw HTML content. Always a fresh navigation, so every script
    /// in the document runs again.
    pub fn load_html(&self, html: &str) -> Result<(), wry::Error> {
        self.webview.load_html(html)
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to JavaScript. Sandboxed panes have no
    /// bridge, so this is a no-op for them.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        if self.isolation == Isolation::Sandboxed {
            return Ok(());
        }
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Set the color painted behind the page.
    pub fn set_background(&self, rgba: (u8, u8, u8, u8)) -> Result<(), wry::Error> {
        self.webview.set_background_color(rgba)
    }
}
