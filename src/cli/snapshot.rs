//! Snapshot command implementation

use super::Context;
use crate::data::{timestamp_id, EventSnapshot};
use anyhow::Context as _;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Max events to capture
    #[arg(short, long, default_value_t = 100)]
    pub limit: u32,

    /// Capture all active events
    #[arg(short, long)]
    pub all: bool,
}

impl SnapshotArgs {
    pub async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let (snapshot, path) = self.capture(ctx).await.context("Error taking snapshot")?;

        println!("\n✅ Snapshot saved: {}", path.display());
        println!(
            "   {} events captured at {}",
            snapshot.event_count,
            snapshot.timestamp.to_rfc3339()
        );
        Ok(())
    }

    /// Fetch events and write them as one snapshot file
    pub async fn capture(&self, ctx: &Context) -> anyhow::Result<(EventSnapshot, PathBuf)> {
        let now = Utc::now();
        let run_id = timestamp_id(now);

        if self.all {
            eprintln!("Fetching all active events...");
        } else {
            eprintln!("Fetching top {} active events...", self.limit);
        }

        let events = ctx.fetch(self.all, self.limit).await?;
        let snapshot = EventSnapshot::new(now, events);
        let path = ctx.store.write(EventSnapshot::path(&run_id), &snapshot).await?;

        tracing::info!(events = snapshot.event_count, path = ?path, "Snapshot written");
        Ok((snapshot, path))
    }
}
