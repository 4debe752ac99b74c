//! Resizable panel state, drag gestures, and window layout.
//!
//! Everything here is pure state: no window or webview types. The app
//! feeds pointer coordinates in and reads rectangles out.

pub mod gesture;
pub mod layout;
pub mod panel;
pub mod stack;

pub use gesture::{DragGesture, PointerCapture, PointerListeners, Subscription};
pub use layout::{hit_test_handle, LayoutEngine, PanelRect, WindowLayout};
pub use panel::{PanelId, ResizablePanel};
pub use stack::PanelStack;
