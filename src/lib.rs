//! poly-agent: Research agent for Polymarket prediction markets
//!
//! This library provides the core components for:
//! - Fetching active events from the Gamma API
//! - Filtering and compact export of events
//! - JSON snapshots, research results and daily actions on disk
//! - Edge analysis and action recommendations
//! - Structured logging

pub mod cli;
pub mod config;
pub mod data;
pub mod market;
pub mod research;
pub mod telemetry;
