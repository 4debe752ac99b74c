use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::{Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider, SCHEME};
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::{Isolation, WebViewConfig};
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The WebView is positioned at `bounds` within the parent window.
    /// Sandboxed panes get neither the IPC bridge nor the custom protocol.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        pane_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);
        let pid = pane_id;
        let sandboxed = config.isolation == Isolation::Sandboxed;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard && !sandboxed)
            .with_autoplay(false)
            .with_visible(config.visible)
            .with_incognito(sandboxed)
            .with_focused(false);

        if let Some(rgba) = config.background {
            builder = builder.with_background_color(rgba);
        }

        if !sandboxed {
            builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
            builder = Self::attach_ipc_handler(builder, Arc::clone(&events), pid);
            builder = self.attach_custom_protocol(builder);
        }

        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), pid);
        builder =
            Self::attach_navigation_handler(builder, Arc::clone(&events), pid, config.isolation);

        builder = match (&config.url, &config.html) {
            (Some(url), _) => builder.with_url(url),
            (None, Some(html)) => builder.with_html(html),
            (None, None) => builder.with_html("<html><body></body></html>"),
        };

        let webview = builder.build_as_child(window)?;

        debug!(pane_id, isolation = ?config.isolation, url = ?config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            isolation: config.isolation,
        })
    }

    /// Set the content provider for serving bundled assets via `livepane://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = request_path(&uri);

                match cp.resolve(path) {
                    Some((mime, data)) => respond(StatusCode::OK, mime, data.into_owned()),
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        respond(StatusCode::NOT_FOUND, "text/plain", b"Not Found".to_vec())
                    }
                }
            });
        }
        builder
    }
}

fn respond(status: StatusCode, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Owned(body));
    *response.status_mut() = status;
    if let Ok(value) = mime.parse() {
        response
            .headers_mut()
            .insert(wry::http::header::CONTENT_TYPE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respond_sets_status_and_content_type() {
        let response = respond(StatusCode::OK, "text/html", b"<p>".to_vec());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[wry::http::header::CONTENT_TYPE],
            "text/html"
        );
        assert_eq!(response.body().as_ref(), b"<p>");
    }

    #[test]
    fn respond_skips_unparseable_mime() {
        let response = respond(StatusCode::NOT_FOUND, "bad\nmime", Vec::new());
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response
            .headers()
            .get(wry::http::header::CONTENT_TYPE)
            .is_none());
    }
}
