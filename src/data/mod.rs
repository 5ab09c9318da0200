//! Data persistence module
//!
//! Stores fetched events, research and actions as JSON files under a data
//! directory

mod snapshot;
mod store;

pub use snapshot::{timestamp_id, EventSnapshot, ACTIONS_DIR, EVENTS_DIR, RESEARCH_DIR};
pub use store::{FileStore, StoreError};
