//! End-to-end research runs against an in-memory source

use chrono::Utc;
use poly_agent::cli::{ActionsArgs, ResearchArgs};
use poly_agent::data::{timestamp_id, FileStore, ACTIONS_DIR, RESEARCH_DIR};
use poly_agent::market::Market;
use poly_agent::research::{
    Action, ActionPolicy, Confidence, DailyActions, Estimate, EventResearch, ProbabilityEstimator,
    Researcher, RiskLevel,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use crate::support::{context, event, StaticSource};

/// Adds a fixed edge per market id, echoes the price elsewhere
struct FixedEdge {
    edges: Vec<(&'static str, Decimal)>,
}

impl FixedEdge {
    fn new(edges: &[(&'static str, Decimal)]) -> Self {
        Self {
            edges: edges.to_vec(),
        }
    }
}

impl ProbabilityEstimator for FixedEdge {
    fn estimate(&self, market: &Market, yes_price: Decimal) -> Estimate {
        let edge = self
            .edges
            .iter()
            .find(|(id, _)| market.id == *id)
            .map(|(_, edge)| *edge)
            .unwrap_or(Decimal::ZERO);
        Estimate {
            probability: yes_price + edge,
            confidence: Confidence::Medium,
            reasoning: "fixed".to_string(),
            sources: vec!["test".to_string()],
        }
    }
}

fn args(event_id: Option<&str>) -> ResearchArgs {
    ResearchArgs {
        event_id: event_id.map(str::to_string),
        min_volume: None,
        min_liquidity: None,
        limit: 20,
        category: None,
        search: None,
    }
}

#[tokio::test]
async fn test_one_actionable_event_recorded() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    let researcher = Researcher::new(
        store.clone(),
        FixedEdge::new(&[("b-m", dec!(0.06))]),
        ActionPolicy::default(),
    );
    let run_id = timestamp_id(Utc::now());

    let mut results = vec![];
    for e in [event("a", 5000.0, "0.5"), event("b", 5000.0, "0.5")] {
        results.push(researcher.research_event(&e, &run_id).await.unwrap());
    }
    assert_eq!(results[0].action, Action::Skip);
    assert_eq!(results[1].markets[0].edge, dec!(0.06));

    let (actions, path) = researcher.record_actions(&results, &run_id).await.unwrap();
    assert!(path.ends_with(format!("actions/{}.json", run_id)));

    assert_eq!(actions.recommendations.len(), 1);
    let rec = &actions.recommendations[0];
    assert_eq!(rec.event_id, "b");
    assert_eq!(rec.action, Action::BuyYes);
    assert_eq!(rec.risk_level, RiskLevel::Medium);
    assert_eq!(rec.top_edge, dec!(0.06));
    assert_eq!(rec.confidence, Confidence::Medium);

    let stored: DailyActions = store.latest(ACTIONS_DIR).await.unwrap().unwrap();
    assert_eq!(stored, actions);

    let research_b: EventResearch = store
        .read(EventResearch::path("b", &run_id))
        .await
        .unwrap()
        .unwrap();
    assert!(research_b.action_reasoning.contains("underpricing YES"));
    assert!(research_b.action_reasoning.contains("6.0%"));
}

#[tokio::test]
async fn test_batch_run_filters_and_limits() {
    let dir = TempDir::new().unwrap();
    let events = vec![
        event("small", 10.0, "0.5"),
        event("big1", 5000.0, "0.4"),
        event("big2", 8000.0, "0.7"),
        event("big3", 9000.0, "0.2"),
    ];
    let ctx = context(StaticSource::new(events), dir.path());

    let mut args = args(None);
    args.min_volume = Some(dec!(1000));
    args.limit = 2;

    let run = args.run(&ctx).await.unwrap();
    let ids: Vec<_> = run.results.iter().map(|r| r.event_id.as_str()).collect();
    assert_eq!(ids, vec!["big1", "big2"]);
    assert!(run.results.iter().all(|r| r.action == Action::Skip));

    let (actions, _) = run.actions.unwrap();
    assert!(actions.recommendations.is_empty());

    assert_eq!(ctx.store.list_files(RESEARCH_DIR).await.unwrap(), vec!["big1", "big2"]);
    assert_eq!(ctx.store.list_files(ACTIONS_DIR).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_single_event_run() {
    let dir = TempDir::new().unwrap();
    let events = (0..5).map(|i| event(&format!("e{}", i), 100.0, "0.5")).collect();
    let ctx = context(StaticSource::new(events), dir.path());

    let run = args(Some("e4")).run(&ctx).await.unwrap();
    assert_eq!(run.results.len(), 1);
    assert_eq!(run.results[0].event_id, "e4");
    assert!(run.actions.is_none());

    assert_eq!(ctx.store.list_files("research/e4").await.unwrap().len(), 1);
    assert!(ctx.store.list_files(ACTIONS_DIR).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_event_fails() {
    let dir = TempDir::new().unwrap();
    let ctx = context(StaticSource::new(vec![event("e1", 1.0, "0.5")]), dir.path());

    let err = args(Some("nope")).run(&ctx).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Event nope not found"));
}

#[tokio::test]
async fn test_bad_market_aborts_batch_before_actions() {
    let dir = TempDir::new().unwrap();
    let mut broken = event("broken", 5000.0, "0.5");
    broken.markets[0].outcome_prices = poly_agent::market::StringList::Encoded("[\"0.5\"]".into());
    let ctx = context(
        StaticSource::new(vec![event("ok", 5000.0, "0.5"), broken]),
        dir.path(),
    );

    let err = args(None).run(&ctx).await.unwrap_err();
    assert!(format!("{:#}", err).contains("broken"));

    // Earlier results stay on disk, no actions file is written
    assert_eq!(ctx.store.list_files(RESEARCH_DIR).await.unwrap(), vec!["ok"]);
    assert!(ctx.store.list_files(ACTIONS_DIR).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_research_command_records_one_action() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(
        StaticSource::new(vec![event("a", 5000.0, "0.5"), event("b", 5000.0, "0.5")]),
        dir.path(),
    );
    ctx.estimator = Box::new(FixedEdge::new(&[("b-m", dec!(0.06))]));

    let run = args(None).run(&ctx).await.unwrap();
    assert_eq!(run.results.len(), 2);

    let (actions, _) = run.actions.as_ref().unwrap();
    assert_eq!(actions.recommendations.len(), 1);
    assert_eq!(actions.recommendations[0].event_id, "b");
    assert_eq!(actions.recommendations[0].action, Action::BuyYes);
    assert_eq!(actions.recommendations[0].risk_level, RiskLevel::Medium);

    let latest = ActionsArgs {}.latest(&ctx).await.unwrap().unwrap();
    assert_eq!(&latest, actions);
}

#[tokio::test]
async fn test_actionable_sorted_by_edge() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(
        StaticSource::new(vec![
            event("small", 5000.0, "0.5"),
            event("flat", 5000.0, "0.5"),
            event("large", 5000.0, "0.5"),
            event("mid", 5000.0, "0.5"),
        ]),
        dir.path(),
    );
    ctx.estimator = Box::new(FixedEdge::new(&[
        ("small-m", dec!(0.07)),
        ("large-m", dec!(-0.3)),
        ("mid-m", dec!(0.12)),
    ]));

    let run = args(None).run(&ctx).await.unwrap();
    let order: Vec<_> = run.actionable().iter().map(|r| r.event_id.as_str()).collect();
    assert_eq!(order, vec!["large", "mid", "small"]);
    assert_eq!(run.actionable()[0].action, Action::BuyNo);
    assert_eq!(run.actionable()[0].risk_level, RiskLevel::High);
}

#[tokio::test]
async fn test_actions_without_runs() {
    let dir = TempDir::new().unwrap();
    let ctx = context(StaticSource::new(vec![]), dir.path());

    assert!(ActionsArgs {}.latest(&ctx).await.unwrap().is_none());
    ActionsArgs {}.execute(&ctx).await.unwrap();
}

#[tokio::test]
async fn test_actions_with_empty_run() {
    let dir = TempDir::new().unwrap();
    let ctx = context(StaticSource::new(vec![event("a", 5000.0, "0.5")]), dir.path());

    args(None).run(&ctx).await.unwrap();

    let latest = ActionsArgs {}.latest(&ctx).await.unwrap().unwrap();
    assert!(latest.recommendations.is_empty());
    ActionsArgs {}.execute(&ctx).await.unwrap();
}
