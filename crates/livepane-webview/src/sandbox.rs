//! Isolation shell for the preview pane.
//!
//! The composed document never runs in a context that can reach the host.
//! It is embedded as the `srcdoc` of an iframe whose `sandbox` attribute
//! grants script execution only, so the document gets an opaque origin
//! with no storage, no top navigation, no popups and no forms. The
//! hosting webview itself is created without an IPC bridge.

/// Capabilities granted to the preview frame. Never includes
/// `allow-same-origin`.
pub const SANDBOX_FLAGS: &str = "allow-scripts";

/// Wrap a composed document in the sandbox shell page.
///
/// `background` is the CSS color painted behind the frame.
pub fn sandbox_document(document: &str, background: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\">",
            "<style>html,body{{margin:0;height:100%;overflow:hidden;background:{bg};}}",
            "iframe{{border:0;width:100%;height:100%;display:block;background:{bg};}}</style>",
            "</head><body>",
            "<iframe sandbox=\"{flags}\" referrerpolicy=\"no-referrer\" srcdoc=\"{doc}\"></iframe>",
            "</body></html>"
        ),
        bg = escape_attribute(background),
        flags = SANDBOX_FLAGS,
        doc = escape_attribute(document),
    )
}

/// Escape text for use inside a double-quoted HTML attribute value.
pub fn escape_attribute(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
