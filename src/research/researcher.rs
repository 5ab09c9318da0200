//! Research runs: analyze events and persist the results

use super::{analyze_market, ActionPolicy, DailyActions, EventResearch, ProbabilityEstimator};
use crate::data::FileStore;
use crate::market::Event;
use anyhow::Context;
use chrono::Utc;
use std::path::PathBuf;

/// Analyzes events and writes research/actions documents to a store
pub struct Researcher<E: ProbabilityEstimator> {
    store: FileStore,
    estimator: E,
    policy: ActionPolicy,
}

impl<E: ProbabilityEstimator> Researcher<E> {
    /// Create a researcher writing to `store`
    pub fn new(store: FileStore, estimator: E, policy: ActionPolicy) -> Self {
        Self {
            store,
            estimator,
            policy,
        }
    }

    /// Analyze an event without persisting anything
    pub fn analyze(&self, event: &Event) -> anyhow::Result<EventResearch> {
        let markets = event
            .markets
            .iter()
            .map(|m| analyze_market(m, &self.estimator))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("failed to analyze event {}", event.id))?;

        let decision = self.policy.decide(&markets);

        tracing::debug!(
            event_id = %event.id,
            action = %decision.action,
            risk = %decision.risk_level,
            "Decided action"
        );

        Ok(EventResearch {
            event_id: event.id.clone(),
            title: event.title.clone(),
            timestamp: Utc::now(),
            markets,
            action: decision.action,
            action_reasoning: decision.reasoning,
            risk_level: decision.risk_level,
            research_summary: None,
            analyst: None,
        })
    }

    /// Analyze an event and write `research/<eventId>/<run_id>.json`
    pub async fn research_event(&self, event: &Event, run_id: &str) -> anyhow::Result<EventResearch> {
        let research = self.analyze(event)?;
        self.store
            .write(EventResearch::path(&event.id, run_id), &research)
            .await?;
        Ok(research)
    }

    /// Write the run's non-SKIP results to `actions/<run_id>.json`
    pub async fn record_actions(
        &self,
        results: &[EventResearch],
        run_id: &str,
    ) -> anyhow::Result<(DailyActions, PathBuf)> {
        let actions = DailyActions::from_results(Utc::now(), results);
        let path = self.store.write(DailyActions::path(run_id), &actions).await?;

        tracing::info!(
            analyzed = results.len(),
            actionable = actions.recommendations.len(),
            path = ?path,
            "Recorded daily actions"
        );
        Ok((actions, path))
    }
}
