//! Builders to wire controllers from configuration.

pub mod facility;

pub use facility::{build_facility, Facility};
