mod kernel;
pub mod tiling;

pub use kernel::*;
