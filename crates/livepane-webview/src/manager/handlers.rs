use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::types::Isolation;
use super::WebViewManager;

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// URL prefixes a trusted pane may navigate to.
///
/// - `livepane://` custom protocol for bundled pane pages
/// - `http(s)://livepane.localhost` the same protocol as rewritten by WebView2
/// - `about:blank` default empty page
pub const TRUSTED_NAV_PREFIXES: &[&str] = &[
    "livepane://",
    "http://livepane.localhost",
    "https://livepane.localhost",
    "about:blank",
];

/// URL prefixes the sandboxed preview may navigate to. Every preview load
/// is inline HTML, which surfaces as an `about:` URL.
pub const SANDBOXED_NAV_PREFIXES: &[&str] = &["about:"];

/// Check whether a URL is allowed for a pane with the given isolation.
pub fn is_navigation_allowed(isolation: Isolation, url: &str) -> bool {
    let prefixes = match isolation {
        Isolation::Trusted => TRUSTED_NAV_PREFIXES,
        Isolation::Sandboxed => SANDBOXED_NAV_PREFIXES,
    };
    prefixes.iter().any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    pane_id = pid,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage { pane_id: pid, body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(pane_id = pid, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad {
                    pane_id: pid,
                    state,
                    url,
                });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        pid: u32,
        isolation: Isolation,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if is_navigation_allowed(isolation, &url) {
                return true;
            }

            warn!(pane_id = pid, ?isolation, url = %url, "navigation blocked");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NavigationBlocked { pane_id: pid, url });
            }
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
