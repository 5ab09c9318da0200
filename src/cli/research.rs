//! Research command implementation

use super::format::{print_research, rule};
use super::Context;
use crate::data::timestamp_id;
use crate::market::{Event, EventFilter};
use crate::research::{Action, DailyActions, EventResearch, Researcher};
use anyhow::Context as _;
use chrono::Utc;
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ResearchArgs {
    /// Research a single event by ID
    pub event_id: Option<String>,

    /// Minimum event volume
    #[arg(long)]
    pub min_volume: Option<Decimal>,

    /// Minimum event liquidity
    #[arg(long)]
    pub min_liquidity: Option<Decimal>,

    /// Max events to research
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,

    /// Filter by market category (substring)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by text in title, description or questions
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Outcome of one research invocation
#[derive(Debug)]
pub struct ResearchRun {
    pub results: Vec<EventResearch>,
    /// Recorded recommendations, absent for single-event runs
    pub actions: Option<(DailyActions, PathBuf)>,
}

impl ResearchRun {
    /// Non-SKIP results by descending absolute top edge
    pub fn actionable(&self) -> Vec<&EventResearch> {
        let mut actionable: Vec<_> = self
            .results
            .iter()
            .filter(|r| r.action != Action::Skip)
            .collect();
        actionable.sort_by(|a, b| b.top_edge().cmp(&a.top_edge()));
        actionable
    }
}

impl ResearchArgs {
    pub async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let run = self.run(ctx).await.context("Research failed")?;

        match &run.actions {
            None => {
                println!();
                for research in &run.results {
                    print_research(research);
                }
            }
            Some((actions, path)) => print_summary(&run, actions, path),
        }
        Ok(())
    }

    pub fn filter(&self) -> EventFilter {
        EventFilter {
            min_volume: self.min_volume,
            min_liquidity: self.min_liquidity,
            category: self.category.clone(),
            search: self.search.clone(),
        }
    }

    /// Events to research, in fetch order
    pub async fn select_events(&self, ctx: &Context) -> anyhow::Result<Vec<Event>> {
        if let Some(id) = &self.event_id {
            eprintln!("Fetching event {}...", id);
            let event = ctx
                .fetch_all()
                .await?
                .into_iter()
                .find(|e| &e.id == id)
                .ok_or_else(|| anyhow::anyhow!("Event {} not found among active events.", id))?;
            return Ok(vec![event]);
        }

        eprintln!("Fetching active events...");
        let candidates = ctx.fetch_page(ctx.research.candidate_pool).await?;
        let fetched = candidates.len();

        let mut events = self.filter().apply(candidates);
        events.truncate(self.limit);

        tracing::debug!(fetched, selected = events.len(), "Selected research candidates");
        Ok(events)
    }

    /// Research the selected events and persist every result
    pub async fn run(&self, ctx: &Context) -> anyhow::Result<ResearchRun> {
        let run_id = timestamp_id(Utc::now());
        let researcher = Researcher::new(
            ctx.store.clone(),
            ctx.estimator.as_ref(),
            ctx.research.policy(),
        );

        let events = self.select_events(ctx).await?;
        let total = events.len();
        let mut results = Vec::with_capacity(total);

        if self.event_id.is_none() {
            eprintln!("Researching {} events...\n", total);
        }

        for (i, event) in events.iter().enumerate() {
            if self.event_id.is_none() {
                eprintln!("[{}/{}] Analyzing: {}", i + 1, total, event.title);
            }
            results.push(researcher.research_event(event, &run_id).await?);
        }

        let actions = if self.event_id.is_none() {
            Some(researcher.record_actions(&results, &run_id).await?)
        } else {
            None
        };

        Ok(ResearchRun { results, actions })
    }
}

fn print_summary(run: &ResearchRun, actions: &DailyActions, path: &std::path::Path) {
    let results = &run.results;
    println!("\n{}", rule('═'));
    println!("RESEARCH SUMMARY");
    println!("{}", rule('═'));
    println!("Events analyzed: {}", results.len());
    println!(
        "Actionable: {} │ Skipped: {}",
        actions.recommendations.len(),
        results.iter().filter(|r| r.action == Action::Skip).count()
    );
    println!("Actions saved: {}", path.display());
    println!("{}\n", rule('═'));

    let actionable = run.actionable();
    if actionable.is_empty() {
        println!("No actionable opportunities found.");
        return;
    }

    for research in actionable {
        print_research(research);
    }
}
