//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, playground state, panel layout, the
//! backdrop renderer and the pane webviews.

mod core;
mod event_handler;
mod init;
mod resize_drag;
mod types;
mod webview_bridge;

pub use self::core::LivepaneApp;
