//! Bridge between the playground state and the pane webviews.
//!
//! Handles coordinate conversion, pane creation and placement, IPC message
//! dispatch, theme propagation, and preview refresh.

mod bounds;
mod ipc_dispatch;
mod lifecycle;
mod preview;
mod theme_handlers;
