//! In-memory collaborator implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::Mutex;

use crate::core::closing::ReportGenerator;
use crate::core::occupancy::VisitorCounter;

/// Per-date visitor totals kept in memory.
#[derive(Default)]
pub struct InMemoryVisitorLog {
    counts: Mutex<HashMap<NaiveDate, u32>>,
}

impl InMemoryVisitorLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total admissions recorded for `date`.
    pub fn total_for(&self, date: NaiveDate) -> u32 {
        self.counts.lock().get(&date).copied().unwrap_or(0)
    }
}

#[async_trait]
impl VisitorCounter for InMemoryVisitorLog {
    async fn increment_daily_visitors(&self) -> anyhow::Result<()> {
        let today = Utc::now().date_naive();
        *self.counts.lock().entry(today).or_insert(0) += 1;
        Ok(())
    }
}

/// Visitor counter that drops events, for deployments without statistics.
pub struct NoopVisitorCounter;

#[async_trait]
impl VisitorCounter for NoopVisitorCounter {
    async fn increment_daily_visitors(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Report generator that records the close timestamps it was asked to report
/// on, for development and tests.
#[derive(Default)]
pub struct RecordingReportGenerator {
    requests: Mutex<Vec<DateTime<Utc>>>,
}

impl RecordingReportGenerator {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Close timestamps received so far.
    pub fn requests(&self) -> Vec<DateTime<Utc>> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ReportGenerator for RecordingReportGenerator {
    async fn generate_daily_report(&self, closed_at: DateTime<Utc>) -> anyhow::Result<()> {
        self.requests.lock().push(closed_at);
        Ok(())
    }
}
