//! Export command implementation

use super::Context;
use crate::market::{CompactEvent, Event, EventFilter};
use anyhow::Context as _;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Event IDs to export
    pub ids: Vec<String>,

    /// Max events when no IDs are given
    #[arg(short, long, default_value_t = 20)]
    pub limit: u32,

    /// Export all active events
    #[arg(short, long)]
    pub all: bool,

    /// Minimum event volume
    #[arg(long)]
    pub min_volume: Option<Decimal>,

    /// Minimum event liquidity
    #[arg(long)]
    pub min_liquidity: Option<Decimal>,
}

impl ExportArgs {
    pub async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let events = self.collect(ctx).await.context("Error exporting events")?;
        println!("{}", serde_json::to_string_pretty(&events)?);
        Ok(())
    }

    /// Select, filter and project events
    pub async fn collect(&self, ctx: &Context) -> anyhow::Result<Vec<CompactEvent>> {
        let events = self.select(ctx).await?;

        let filter = EventFilter {
            min_volume: self.min_volume,
            min_liquidity: self.min_liquidity,
            ..Default::default()
        };

        filter
            .apply(events)
            .iter()
            .map(|event| {
                CompactEvent::try_from(event)
                    .with_context(|| format!("failed to export event {}", event.id))
            })
            .collect()
    }

    async fn select(&self, ctx: &Context) -> anyhow::Result<Vec<Event>> {
        if self.all {
            return ctx.fetch_all().await;
        }

        if self.ids.is_empty() {
            return ctx.fetch_page(self.limit).await;
        }

        let events: Vec<Event> = ctx
            .fetch_all()
            .await?
            .into_iter()
            .filter(|e| self.ids.contains(&e.id))
            .collect();

        for id in &self.ids {
            if !events.iter().any(|e| &e.id == id) {
                eprintln!("Warning: event {} not found among active events", id);
            }
        }
        Ok(events)
    }
}
