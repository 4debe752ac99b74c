mod color;
mod core;
mod mode;

pub use self::core::*;
pub use color::*;
pub use mode::*;
