//! Store backends for the occupancy record, shift registry, and worker
//! directory.

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryOccupancyStore, InMemoryShiftRegistry, InMemoryWorkerDirectory};
pub use postgres::{PostgresOccupancyStore, PostgresShiftRegistry, PostgresWorkerDirectory};
