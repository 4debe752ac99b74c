//! IPC protocol between Rust and the trusted pane pages.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: pages call `window.livepane.ipc.send(kind, payload)`,
//!   which posts `{kind, payload}` JSON to the `ipc_handler` on the WebView.
//! - **Rust -> JS**: Rust calls `evaluate_script` with a snippet that invokes
//!   the handler the page registered via `window.livepane.ipc.on(kind, fn)`.
//!
//! The sandboxed preview never gets this bridge.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload.
    #[serde(default = "IpcPayload::none")]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
}

impl IpcPayload {
    fn none() -> Self {
        IpcPayload::Json(serde_json::Value::Null)
    }

    /// Deserialize a structured payload into `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match self {
            IpcPayload::Text(s) => serde_json::from_value(serde_json::Value::String(s.clone())),
            IpcPayload::Json(v) => serde_json::from_value(v.clone()),
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
///
/// Injected as an initialization script into every trusted WebView. Besides
/// the message bridge it forwards document pointer moves/ups to the host, but
/// only while the host has switched capture on with `pointer_capture`.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.livepane = window.livepane || {};
    var ipc = window.livepane.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };

    var capturing = false;
    ipc.on('pointer_capture', function(on) { capturing = !!on; });
    document.addEventListener('mousemove', function(e) {
        if (capturing) { ipc.send('pointer_move', { y: e.clientY, buttons: e.buttons }); }
    }, true);
    document.addEventListener('mouseup', function(e) {
        if (capturing) { ipc.send('pointer_up', { y: e.clientY }); }
    }, true);
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.livepane && window.livepane.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Change {
        language: String,
        content: String,
    }

    #[test]
    fn parses_structured_payload() {
        let msg = IpcMessage::from_json(
            r#"{"kind":"buffer_changed","payload":{"language":"css","content":"p{}"}}"#,
        )
        .unwrap();
        assert_eq!(msg.kind, "buffer_changed");
        let change: Change = msg.payload.parse().unwrap();
        assert_eq!(
            change,
            Change {
                language: "css".into(),
                content: "p{}".into()
            }
        );
    }

    #[test]
    fn parses_text_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"set_mode","payload":"html-css"}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::Text(ref s) if s == "html-css"));
    }

    #[test]
    fn null_and_missing_payloads() {
        let msg = IpcMessage::from_json(r#"{"kind":"toggle_theme","payload":null}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::Json(serde_json::Value::Null)));
        let msg = IpcMessage::from_json(r#"{"kind":"toggle_theme"}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::Json(serde_json::Value::Null)));
    }

    #[test]
    fn rejects_non_json_and_missing_kind() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn dispatch_snippet_escapes_kind_and_payload() {
        let js = js_dispatch_message("editor_init", &serde_json::json!({"content": "</script>\"'"}));
        assert!(js.starts_with("window.livepane && window.livepane.ipc._dispatch(\"editor_init\", "));
        assert!(js.contains(r#"\"'"#));
        assert!(js.ends_with(");"));
    }

    #[test]
    fn init_script_gates_pointer_forwarding() {
        assert!(IPC_INIT_SCRIPT.contains("pointer_capture"));
        assert!(IPC_INIT_SCRIPT.contains("if (capturing)"));
    }
}
