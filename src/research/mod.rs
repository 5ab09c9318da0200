//! Research module
//!
//! Per-market edge analysis, event-level action decisions, and persisted
//! research runs.

mod action;
mod analyzer;
mod estimator;
mod researcher;
mod types;

pub use action::{determine_action, ActionDecision, ActionPolicy};
pub use analyzer::analyze_market;
pub use estimator::{BaselineEstimator, Estimate, ProbabilityEstimator};
pub use researcher::Researcher;
pub use types::{
    top_analysis, Action, ActionRecommendation, Confidence, DailyActions, EventResearch,
    MarketAnalysis, PriceQuote, RiskLevel,
};
