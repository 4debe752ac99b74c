//! Native backdrop rendering for the playground window.
//!
//! Child webviews cover almost the whole window. What remains visible
//! (panel resize strips, the column gap) is painted here with wgpu in the
//! current chrome color.

pub mod backdrop;
pub mod gpu;

pub use backdrop::{clear_color_for, srgb_to_linear, Backdrop};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
