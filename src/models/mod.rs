pub mod schedule;
pub mod time;
pub mod week;

pub use schedule::*;
pub use time::*;
pub use week::*;
