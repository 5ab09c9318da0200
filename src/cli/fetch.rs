//! Fetch-events command implementation

use super::format::{print_event, rule};
use super::Context;
use anyhow::Context as _;
use clap::Args;

#[derive(Args, Debug)]
pub struct FetchEventsArgs {
    /// Max events to fetch
    #[arg(short, long, default_value_t = 20)]
    pub limit: u32,

    /// Fetch all active events (no limit)
    #[arg(short, long)]
    pub all: bool,

    /// Output raw JSON
    #[arg(long)]
    pub json: bool,
}

impl FetchEventsArgs {
    pub async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        if self.all {
            eprintln!("Fetching all active events...");
        } else {
            eprintln!("Fetching top {} active events by volume...", self.limit);
        }

        let events = ctx
            .fetch(self.all, self.limit)
            .await
            .context("Error fetching events")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&events)?);
            return Ok(());
        }

        println!("\nFound {} active events\n", events.len());

        for (i, event) in events.iter().enumerate() {
            print_event(event, i);
        }

        println!("\n{}", rule('─'));
        Ok(())
    }
}
