//! WebView bridge for the playground's panes.
//!
//! Wraps the `wry` crate to provide:
//! - Managed child WebView instances per pane
//! - Bidirectional IPC (Rust <-> JavaScript) for trusted panes
//! - A sandboxed isolation mode for the preview pane
//! - Custom protocol for serving bundled pane pages
//! - Theme CSS generation with value sanitization

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod sandbox;
pub mod theme_bridge;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{Isolation, WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
pub use sandbox::{sandbox_document, SANDBOX_FLAGS};
pub use theme_bridge::{CssValueKind, ThemeVariables};
