//! Unit tests for individual components

mod api_test;
mod audit_test;
mod clock_test;
mod config_test;
mod error_test;
mod store_test;
mod window_test;
mod worker_test;
