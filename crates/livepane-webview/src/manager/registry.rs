use std::collections::HashMap;

use tracing::debug;
use wry::raw_window_handle;

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Maps pane IDs to WebView handles.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<u32, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Build a registry whose trusted panes are served by `provider`.
    pub fn with_content(provider: ContentProvider) -> Self {
        let mut manager = WebViewManager::new();
        manager.set_content_provider(provider);
        Self::new(manager)
    }

    /// Create a WebView for a pane and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        pane_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(pane_id, window, bounds, config)?;
        self.handles.insert(pane_id, handle);
        Ok(())
    }

    pub fn get(&self, pane_id: u32) -> Option<&WebViewHandle> {
        self.handles.get(&pane_id)
    }

    /// Destroy a WebView by pane ID.
    pub fn destroy(&mut self, pane_id: u32) -> bool {
        if self.handles.remove(&pane_id).is_some() {
            debug!(pane_id, "WebView destroyed");
            true
        } else {
            false
        }
    }

    pub fn active_panes(&self) -> Vec<u32> {
        self.handles.keys().copied().collect()
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all active WebViews. Used during shutdown.
    pub fn destroy_all(&mut self) {
        for pane_id in self.active_panes() {
            self.destroy(pane_id);
        }
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry() {
        let mut registry = WebViewRegistry::with_content(ContentProvider::new());
        assert_eq!(registry.count(), 0);
        assert!(registry.get(1).is_none());
        assert!(!registry.destroy(1));
        assert!(registry.drain_events().is_empty());
    }
}
