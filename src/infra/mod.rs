//! Infrastructure adapters for stores and collaborators.

pub mod collab;
pub mod store;

pub use collab::{InMemoryVisitorLog, NoopVisitorCounter, RecordingReportGenerator};
pub use store::{InMemoryOccupancyStore, InMemoryShiftRegistry, InMemoryWorkerDirectory};
