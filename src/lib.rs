//! # PoolTrack Ops
//!
//! Occupancy counting and shift orchestration core for a municipal swimming
//! pool facility.
//!
//! This library is the stateful heart of the PoolTrack platform: the single
//! occupancy record with its entry/exit/capacity rules, the open/closed
//! lifecycle with its cascading side effects, and the time-windowed rules
//! governing when staff shifts may start or stop. Transport (REST/SOAP),
//! authentication, and persistence technology live outside this crate and
//! talk to it through the traits at its seams.
//!
//! ## Components
//!
//! - **Occupancy controller** ([`core::occupancy`]): sole mutator of the
//!   occupancy record. Entry past capacity and exit at zero are silent
//!   no-ops; out-of-range counts and capacities are clamped, never rejected.
//! - **Shift controller** ([`core::shift`]): gates shift starts on pool
//!   state, the facility-local time window (09:00-19:00), and the worker
//!   lifecycle, in that fixed order. Starting twice is tolerated.
//! - **Closing orchestrator** ([`core::closing`]): on the open-to-closed
//!   transition, ends every open shift and requests the daily report. Both
//!   steps are best-effort; their failures surface as warnings, never as
//!   errors to the caller that closed the pool.
//! - **Clock provider** ([`util::clock`]): facility-local time via a named
//!   IANA timezone, falling back to UTC when the zone is unknown.
//!
//! Each mutable store sits behind a `parking_lot::Mutex`, so read-modify-write
//! cycles on the single occupancy record are serialized per record.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pooltrack_ops::builders::build_facility;
//! use pooltrack_ops::config::FacilityConfig;
//! use pooltrack_ops::infra::{InMemoryVisitorLog, RecordingReportGenerator};
//!
//! let cfg = FacilityConfig::default();
//! let facility = build_facility(
//!     &cfg,
//!     InMemoryVisitorLog::new(),
//!     Arc::new(RecordingReportGenerator::new()),
//! )?;
//!
//! let state = facility.occupancy.enter().await?;
//! assert_eq!(state.current_count, 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Transport-facing request/response models.
pub mod api;
/// Builders to wire controllers from configuration.
pub mod builders;
/// Facility configuration models.
pub mod config;
/// Domain logic: occupancy, shifts, workers, and closing side effects.
pub mod core;
/// Infrastructure adapters for stores and collaborators.
pub mod infra;
/// Shared utilities.
pub mod util;
