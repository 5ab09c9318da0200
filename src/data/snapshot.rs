//! Event snapshots and run timestamps

use crate::market::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directory holding event snapshots
pub const EVENTS_DIR: &str = "events";
/// Directory holding per-event research documents
pub const RESEARCH_DIR: &str = "research";
/// Directory holding aggregated daily actions
pub const ACTIONS_DIR: &str = "actions";

/// A point-in-time capture of one fetch batch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    pub timestamp: DateTime<Utc>,
    pub event_count: usize,
    pub events: Vec<Event>,
}

impl EventSnapshot {
    /// Capture `events` at `timestamp`
    pub fn new(timestamp: DateTime<Utc>, events: Vec<Event>) -> Self {
        Self {
            timestamp,
            event_count: events.len(),
            events,
        }
    }

    /// Relative store path for a run
    pub fn path(run_id: &str) -> String {
        format!("{}/{}.json", EVENTS_DIR, run_id)
    }
}

/// Filesystem-safe run identifier: ISO-8601 UTC with millisecond precision
/// and `:`/`.` replaced by `-`
///
/// Zero-padded fields keep lexicographic order equal to chronological
/// order, which the store's listing relies on.
pub fn timestamp_id(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string()
}
