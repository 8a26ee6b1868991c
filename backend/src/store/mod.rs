//! In-memory store for the launch record set.
//!
//! The store is loaded once at startup and is read-only afterwards. It is an
//! explicit value handed to whoever needs it (the view controller, the HTTP
//! state, tests) rather than a process-wide singleton.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Controller / HTTP handlers                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  RecordStore (Arc<[LaunchRecord]>, cheap to clone)      │
//! │  - queries: filter_by_site, filter_by_payload_range,    │
//! │             count_by_outcome                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  loader (Polars CSV reader + schema checks)             │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod loader;
pub mod queries;


pub use error::LoadError;
pub use loader::{load_records, REQUIRED_COLUMNS};
pub use queries::{count_by_outcome, filter_by_payload_range, filter_by_site, LabelCounts};

use std::path::Path;
use std::sync::Arc;

use crate::models::LaunchRecord;

/// Immutable, shareable launch record set.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Arc<[LaunchRecord]>,
}

impl RecordStore {
    /// Load the record set from a CSV file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let records = load_records(path.as_ref())?;
        Ok(Self::from_records(records))
    }

    /// Wrap already-built records, e.g. test fixtures.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in first appearance order.
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in self.records.iter() {
            if !sites.contains(&record.launch_site.as_str()) {
                sites.push(&record.launch_site);
            }
        }
        sites
    }

    /// Observed `(min, max)` payload mass, `None` when the store is empty.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        self.records.iter().map(LaunchRecord::payload_kg).fold(None, |acc, payload| {
            Some(match acc {
                None => (payload, payload),
                Some((min, max)) => (min.min(payload), max.max(payload)),
            })
        })
    }
}
