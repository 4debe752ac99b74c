mod calculation;
mod handles;
mod types;

pub use handles::hit_test_handle;
pub use types::*;
