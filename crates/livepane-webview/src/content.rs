//! Local content serving via custom protocol.
//!
//! Registers a `livepane://` custom protocol so that pane pages (editor,
//! toolbar, footer) load without a local HTTP server. Every page is
//! compiled into the binary and registered in memory.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

/// Custom protocol scheme name.
pub const SCHEME: &str = "livepane";

/// Serves pane assets for the `livepane://` custom protocol.
///
/// A request for `livepane://localhost/editor/index.html?lang=css` resolves
/// to the asset registered as `editor/index.html`.
#[derive(Debug, Default)]
pub struct ContentProvider {
    /// path -> (mime, data)
    assets: HashMap<String, (&'static str, Vec<u8>)>,
}

impl ContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an in-memory asset, guessing the MIME type from its extension.
    pub fn add_asset(&mut self, path: &str, data: impl Into<Vec<u8>>) {
        let clean = path.trim_start_matches('/');
        let mime = mime_from_extension(Path::new(clean));
        self.assets.insert(clean.to_string(), (mime, data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(&'static str, Cow<'_, [u8]>)> {
        let clean = strip_query(path).trim_start_matches('/');
        self.assets
            .get(clean)
            .map(|(mime, data)| (*mime, Cow::Borrowed(data.as_slice())))
    }
}

/// Extract the asset path from a `livepane://` request URI.
///
/// WebView2 rewrites custom schemes to `http(s)://livepane.localhost/...`,
/// so those forms are accepted too.
pub fn request_path(uri: &str) -> &str {
    uri.strip_prefix("livepane://localhost/")
        .or_else(|| uri.strip_prefix("livepane://localhost"))
        .or_else(|| uri.strip_prefix("http://livepane.localhost/"))
        .or_else(|| uri.strip_prefix("https://livepane.localhost/"))
        .or_else(|| uri.strip_prefix("livepane:///"))
        .or_else(|| uri.strip_prefix("livepane://"))
        .unwrap_or("")
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
