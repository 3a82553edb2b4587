pub mod aggregate;
pub mod planner;
pub mod window;

pub use aggregate::*;
pub use planner::*;
pub use window::*;

/// Round to 2 decimal places, ties to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
