mod blueprint;
mod error;
mod problem;

pub use blueprint::*;
pub use error::*;
pub use problem::*;
