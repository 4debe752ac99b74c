//! WebView lifecycle management.
//!
//! `WebViewManager` creates, tracks, and destroys `wry::WebView` instances,
//! one per pane: the editor panes, the toolbar, the footer and the preview.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::{Isolation, WebViewConfig};

/// Manages all WebView instances of the window.
pub struct WebViewManager {
    /// Event sink, drained by the main event loop.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Optional content provider for the `livepane://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_takes_all_pending_events() {
        let manager = WebViewManager::new();
        {
            let mut events = manager.events.lock().unwrap();
            events.push(WebViewEvent::IpcMessage {
                pane_id: 1,
                body: "{}".into(),
            });
            events.push(WebViewEvent::NavigationBlocked {
                pane_id: 6,
                url: "https://example.com".into(),
            });
        }

        let drained = manager.drain_events();
        assert_eq!(drained.len(), 2);
        assert!(manager.drain_events().is_empty());
    }
}
