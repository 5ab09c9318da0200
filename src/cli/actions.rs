//! Actions command implementation

use super::format::{action_icon, format_pct, rule};
use super::Context;
use crate::data::ACTIONS_DIR;
use crate::research::DailyActions;
use anyhow::Context as _;
use clap::Args;

#[derive(Args, Debug)]
pub struct ActionsArgs {}

impl ActionsArgs {
    pub async fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        match self.latest(ctx).await.context("Error reading actions")? {
            None => println!("No action files found. Run `research` first."),
            Some(actions) if actions.recommendations.is_empty() => {
                println!("No actionable recommendations in latest run.")
            }
            Some(actions) => print_actions(&actions),
        }
        Ok(())
    }

    /// Most recent actions file, `None` when no research run recorded one
    pub async fn latest(&self, ctx: &Context) -> anyhow::Result<Option<DailyActions>> {
        Ok(ctx.store.latest(ACTIONS_DIR).await?)
    }
}

fn print_actions(actions: &DailyActions) {
    println!("\n{}", rule('═'));
    println!("RECOMMENDED ACTIONS │ {}", actions.timestamp.to_rfc3339());
    println!("{}\n", rule('═'));

    for rec in actions.sorted_by_edge() {
        println!("{} [{}] {}", action_icon(rec.action), rec.action, rec.title);
        println!(
            "   Edge: {} │ Confidence: {} │ Risk: {}",
            format_pct(rec.top_edge),
            rec.confidence,
            rec.risk_level
        );
        println!("   {}", rec.action_reasoning);
        println!("   Event ID: {}\n", rec.event_id);
    }

    println!("{}", rule('─'));
    println!("Total: {} recommendations", actions.recommendations.len());
}
