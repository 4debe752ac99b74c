//! IPC message validation and dispatch from webview to Rust handlers.

use serde::Deserialize;

use livepane_common::{EditorMode, Language};
use livepane_layout::PanelId;
use livepane_webview::IpcMessage;

use crate::app_state::core::LivepaneApp;
use crate::app_state::types::PaneSlot;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from JavaScript.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "buffer_changed",
    "editor_ready",
    "toolbar_ready",
    "footer_ready",
    "set_mode",
    "toggle_theme",
    "pointer_move",
    "pointer_up",
];

pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// Whether `slot` may send `kind`. Editor messages only come from editors,
/// toolbar actions only from the toolbar.
pub fn is_kind_allowed_from(slot: PaneSlot, kind: &str) -> bool {
    match kind {
        "buffer_changed" | "editor_ready" => matches!(slot, PaneSlot::Editor(_)),
        "toolbar_ready" | "set_mode" | "toggle_theme" => slot == PaneSlot::Toolbar,
        "footer_ready" => slot == PaneSlot::Footer,
        "pointer_move" | "pointer_up" => slot.is_trusted(),
        _ => false,
    }
}

// =============================================================================
// PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize, PartialEq)]
pub struct BufferChanged {
    pub language: Language,
    pub content: String,
}

/// Pointer position in the sending pane's viewport.
#[derive(Debug, Deserialize, PartialEq)]
pub struct PointerPayload {
    pub y: f64,
    /// Mouse buttons held (DOM `MouseEvent.buttons`), if reported.
    #[serde(default)]
    pub buttons: Option<u32>,
}

// =============================================================================
// DISPATCH
// =============================================================================

impl LivepaneApp {
    /// Handle a single IPC message from a webview.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, pane_id: u32, body: &str) {
        let Some(slot) = PaneSlot::from_id(pane_id) else {
            tracing::warn!(pane_id, "IPC message rejected: unknown pane");
            return;
        };

        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(
                    ?slot,
                    body_len = body.len(),
                    "IPC message rejected: failed to parse"
                );
                return;
            }
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(?slot, kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }
        if !is_kind_allowed_from(slot, &msg.kind) {
            tracing::warn!(?slot, kind = %msg.kind, "IPC message rejected: wrong pane");
            return;
        }

        tracing::trace!(?slot, kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "buffer_changed" => match msg.payload.parse::<BufferChanged>() {
                Ok(change) => self.handle_buffer_changed(slot, change),
                Err(e) => tracing::warn!(?slot, error = %e, "bad buffer_changed payload"),
            },
            "editor_ready" => {
                if let PaneSlot::Editor(language) = slot {
                    self.handle_editor_ready(language);
                }
            }
            "toolbar_ready" => {
                self.inject_theme(slot);
                self.push_toolbar_state();
            }
            "footer_ready" => {
                self.inject_theme(slot);
                self.push_footer_state();
            }
            "set_mode" => match msg.payload.parse::<EditorMode>() {
                Ok(mode) => self.handle_set_mode(mode),
                Err(e) => tracing::warn!(?slot, error = %e, "bad set_mode payload"),
            },
            "toggle_theme" => {
                self.playground.toggle_color_mode();
                self.apply_theme();
            }
            "pointer_move" => match msg.payload.parse::<PointerPayload>() {
                Ok(p) => self.handle_forwarded_move(slot, p),
                Err(e) => tracing::warn!(?slot, error = %e, "bad pointer_move payload"),
            },
            "pointer_up" => self.end_drag("button released over pane"),
            _ => {
                tracing::warn!(?slot, kind = %msg.kind, "unhandled IPC kind");
            }
        }
    }

    fn handle_buffer_changed(&mut self, slot: PaneSlot, change: BufferChanged) {
        if slot != PaneSlot::Editor(change.language) {
            tracing::warn!(
                ?slot,
                language = %change.language,
                "buffer_changed rejected: language does not match pane"
            );
            return;
        }
        self.playground.edit(change.language, change.content);
        self.refresh_preview();
    }

    fn handle_editor_ready(&self, language: Language) {
        let slot = PaneSlot::Editor(language);
        self.inject_theme(slot);
        self.push_editor_config(language);
        let content = serde_json::json!({ "content": self.playground.buffer(language) });
        self.send_to(slot, "editor_init", &content);
    }

    fn handle_set_mode(&mut self, mode: EditorMode) {
        if self.playground.set_mode(mode) {
            // A hidden pane cannot finish a drag.
            if let Some(panel) = self.panels.dragging_panel() {
                if !self.is_panel_shown(panel) {
                    self.end_drag("panel hidden");
                }
            }
            self.relayout();
        }
        self.push_toolbar_state();
    }

    fn is_panel_shown(&self, panel: PanelId) -> bool {
        match panel {
            PanelId::Editor(language) => self.playground.mode().shows(language),
            PanelId::Preview => true,
        }
    }

    /// Translate a pane-local pointer move to window coordinates.
    fn handle_forwarded_move(&mut self, slot: PaneSlot, pointer: PointerPayload) {
        if !self.panels.is_dragging() {
            return;
        }
        if pointer.buttons == Some(0) {
            self.end_drag("button released outside window");
            return;
        }
        let Some(origin) = self.slot_rect(slot) else {
            return;
        };
        self.drag_to(origin.y + pointer.y);
    }
}

// =============================================================================
// TESTS
// =============================================================================
