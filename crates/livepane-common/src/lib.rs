pub mod errors;
pub mod types;

pub use errors::{ConfigError, LivepaneError};
pub use types::{Color, ColorMode, EditorMode, Language, Rect};

pub type Result<T> = std::result::Result<T, LivepaneError>;
