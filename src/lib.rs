//! GB generation-mix analytics: daily average fuel mix with clean-energy
//! share, and the cleanest contiguous window for EV charging.

pub mod analysis;
pub mod api;
pub mod config;
pub mod domain;
pub mod service;
pub mod telemetry;
pub mod upstream;

pub use service::{AppState, CarbonError, CarbonIntensityService};
