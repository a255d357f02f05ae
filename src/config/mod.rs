//! Facility configuration models.

pub mod facility;

pub use facility::FacilityConfig;
