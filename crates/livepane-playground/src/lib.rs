//! Playground state: source buffers, editor mode, color mode, and the
//! document compositor that turns the buffers into one previewable page.

pub mod buffers;
pub mod compositor;
pub mod editor;
pub mod state;
pub mod theme;

pub use buffers::SourceBuffers;
pub use compositor::composite;
pub use editor::EditorOptions;
pub use state::Playground;
pub use theme::{ChromePalette, ThemeState};
