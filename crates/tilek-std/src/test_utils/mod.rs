mod correctness;
mod data;
mod test_mode;

pub use correctness::*;
pub use data::*;
pub use test_mode::*;
