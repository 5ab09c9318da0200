//! CLI interface for poly-agent
//!
//! Provides subcommands for:
//! - `fetch-events`: List top active events by volume
//! - `snapshot`: Save fetched events to disk
//! - `research`: Analyze events and record actionable ones
//! - `actions`: Show the latest recorded recommendations
//! - `export`: Print a compact JSON view of events

mod actions;
mod export;
mod fetch;
pub mod format;
mod research;
mod snapshot;

pub use actions::ActionsArgs;
pub use export::ExportArgs;
pub use fetch::FetchEventsArgs;
pub use research::{ResearchArgs, ResearchRun};
pub use snapshot::SnapshotArgs;

use crate::config::{Config, ResearchConfig};
use crate::data::FileStore;
use crate::market::{fetch_all_active_events, Event, EventQuery, EventSource, GammaClient, Paging};
use crate::research::{BaselineEstimator, ProbabilityEstimator};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "poly-agent")]
#[command(about = "Polymarket prediction market research agent")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (optional)
    #[arg(long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Data directory, overriding the configured one
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch active events from Polymarket
    FetchEvents(FetchEventsArgs),
    /// Analyze events and record actionable recommendations
    Research(ResearchArgs),
    /// Save a snapshot of active events
    Snapshot(SnapshotArgs),
    /// Show the latest recommendations
    Actions(ActionsArgs),
    /// Export events as compact JSON
    Export(ExportArgs),
}

/// Shared dependencies for command execution
pub struct Context {
    pub source: Box<dyn EventSource>,
    pub store: FileStore,
    pub paging: Paging,
    pub research: ResearchConfig,
    /// Probability model used by `research`
    pub estimator: Box<dyn ProbabilityEstimator>,
}

impl Context {
    /// Wire the Gamma client and file store from configuration
    ///
    /// A relative data directory resolves against the working directory.
    pub fn from_config(config: &Config, data_dir: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = data_dir.unwrap_or(&config.storage.data_dir);
        let root = if data_dir.is_absolute() {
            data_dir.to_path_buf()
        } else {
            std::env::current_dir()?.join(data_dir)
        };

        tracing::debug!(root = ?root, base_url = %config.gamma.base_url, "Initialized context");

        Ok(Self {
            source: Box::new(GammaClient::with_config(config.gamma.client_config())?),
            store: FileStore::new(root),
            paging: config.gamma.paging(),
            research: config.research.clone(),
            estimator: Box::new(BaselineEstimator),
        })
    }

    /// First page of active events by volume
    pub async fn fetch_page(&self, limit: u32) -> anyhow::Result<Vec<Event>> {
        self.source
            .fetch_events(&EventQuery::active_page(limit, 0))
            .await
    }

    /// Every active event
    pub async fn fetch_all(&self) -> anyhow::Result<Vec<Event>> {
        fetch_all_active_events(self.source.as_ref(), self.paging).await
    }

    /// All events when `all` is set, otherwise the first `limit`
    pub async fn fetch(&self, all: bool, limit: u32) -> anyhow::Result<Vec<Event>> {
        if all {
            self.fetch_all().await
        } else {
            self.fetch_page(limit).await
        }
    }
}
