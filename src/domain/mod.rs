pub mod interval;
pub mod report;
pub mod time_window;

pub use interval::*;
pub use report::*;
pub use time_window::*;
