pub mod phase;
pub mod time;

pub use phase::*;
pub use time::*;
