//! WebView lifecycle: create panes, sync bounds, poll events, broadcast.

use livepane_common::{LivepaneError, Rect, Result};
use livepane_webview::{WebViewConfig, WebViewEvent};

use crate::app_state::core::LivepaneApp;
use crate::app_state::types::PaneSlot;

use super::bounds::layout_rect_to_wry;

impl LivepaneApp {
    /// Where a pane's webview goes, or `None` if the pane is hidden.
    pub(in crate::app_state) fn slot_rect(&self, slot: PaneSlot) -> Option<Rect> {
        match slot {
            PaneSlot::Toolbar => Some(self.layout.toolbar),
            PaneSlot::Footer => Some(self.layout.footer),
            _ => {
                let id = slot.panel()?;
                self.layout.panel(id).map(|p| p.content)
            }
        }
    }

    /// Create a webview for every pane. Failures are logged; the rest of
    /// the window keeps working.
    pub(in crate::app_state) fn create_panes(&mut self) {
        for slot in PaneSlot::ALL {
            match self.create_pane(slot) {
                Ok(()) => tracing::debug!(?slot, "webview created"),
                Err(e) => tracing::error!(?slot, error = %e, "failed to create webview"),
            }
        }
        tracing::info!(
            count = self.webviews.as_ref().map_or(0, |r| r.count()),
            "pane webviews created"
        );
    }

    fn create_pane(&mut self, slot: PaneSlot) -> Result<()> {
        let rect = self.slot_rect(slot);
        let config = match slot.url() {
            Some(url) => WebViewConfig::with_url(url),
            None => WebViewConfig::sandboxed(self.preview_html())
                .background(self.preview_background()),
        }
        .visible(rect.is_some());

        let window = self
            .window
            .as_ref()
            .ok_or_else(|| LivepaneError::Window("no window".into()))?;
        let registry = self
            .webviews
            .as_mut()
            .ok_or_else(|| LivepaneError::WebView("registry not initialized".into()))?;

        let bounds = rect.as_ref().map(layout_rect_to_wry).unwrap_or_default();
        registry
            .create(slot.id(), window.as_ref(), bounds, config)
            .map_err(|e| LivepaneError::WebView(e.to_string()))
    }

    /// Move every webview to its current layout rect; hide hidden panes.
    pub(in crate::app_state) fn sync_webview_bounds(&self) {
        let registry = match &self.webviews {
            Some(r) => r,
            None => return,
        };

        for slot in PaneSlot::ALL {
            let Some(handle) = registry.get(slot.id()) else {
                continue;
            };
            let result = match self.slot_rect(slot) {
                Some(rect) => handle
                    .set_bounds(layout_rect_to_wry(&rect))
                    .and_then(|()| handle.set_visible(true)),
                None => handle.set_visible(false),
            };
            if let Err(e) = result {
                tracing::warn!(?slot, error = %e, "failed to place webview");
            }
        }
    }

    /// Drain webview events and dispatch them.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events = match self.webviews.as_ref() {
            Some(r) => r.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { pane_id, body } => {
                    self.handle_ipc_message(pane_id, &body);
                }
                WebViewEvent::PageLoad { pane_id, state, url } => {
                    tracing::debug!(pane_id, ?state, %url, "page load");
                }
                WebViewEvent::NavigationBlocked { pane_id, url } => {
                    tracing::debug!(pane_id, %url, "navigation blocked");
                }
            }
        }
    }

    /// Send an IPC message to one pane.
    pub(in crate::app_state) fn send_to(
        &self,
        slot: PaneSlot,
        kind: &str,
        payload: &serde_json::Value,
    ) {
        let Some(handle) = self.webviews.as_ref().and_then(|r| r.get(slot.id())) else {
            return;
        };
        if let Err(e) = handle.send_ipc(kind, payload) {
            tracing::warn!(?slot, kind, error = %e, "failed to send IPC message");
        }
    }

    /// Evaluate a script in one pane.
    pub(in crate::app_state) fn eval_in(&self, slot: PaneSlot, js: &str) {
        let Some(handle) = self.webviews.as_ref().and_then(|r| r.get(slot.id())) else {
            return;
        };
        if let Err(e) = handle.evaluate_script(js) {
            tracing::warn!(?slot, error = %e, "failed to evaluate script");
        }
    }

    /// Switch pointer forwarding on or off in every trusted pane.
    pub(in crate::app_state) fn set_pointer_capture(&self, on: bool) {
        let payload = serde_json::Value::Bool(on);
        for slot in PaneSlot::ALL.into_iter().filter(|s| s.is_trusted()) {
            self.send_to(slot, "pointer_capture", &payload);
        }
    }
}
