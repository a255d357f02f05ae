//! Shared utilities.

pub mod clock;
pub mod telemetry;

pub use clock::{now_ms, FacilityClock, FixedClock, SystemClock};
pub use telemetry::init_tracing;
