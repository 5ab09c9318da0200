//! Research and recommendation types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended action for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Market underprices Yes
    BuyYes,
    /// Market overprices Yes
    BuyNo,
    /// Edge is marginal
    Hold,
    /// Exit an existing position
    Sell,
    /// Nothing worth doing
    Skip,
}

impl Action {
    /// Wire name, e.g. `BUY_YES`
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::BuyYes => "BUY_YES",
            Action::BuyNo => "BUY_NO",
            Action::Hold => "HOLD",
            Action::Sell => "SELL",
            Action::Skip => "SKIP",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence in an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        })
    }
}

/// Risk attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        })
    }
}

/// Observed Yes/No prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub yes: Decimal,
    pub no: Decimal,
}

/// Analysis of a single market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub market_id: String,
    pub question: String,
    pub current_price: PriceQuote,
    pub estimated_probability: Decimal,
    /// Estimated probability minus the Yes price
    pub edge: Decimal,
    pub confidence: Confidence,
    #[serde(default)]
    pub sources: Vec<String>,
    pub reasoning: String,
}

/// Analysis with the largest absolute edge, first seen on ties
pub fn top_analysis(markets: &[MarketAnalysis]) -> Option<&MarketAnalysis> {
    markets.iter().fold(None, |best, m| match best {
        Some(b) if b.edge.abs() >= m.edge.abs() => Some(b),
        _ => Some(m),
    })
}

/// Research output for one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResearch {
    pub event_id: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub markets: Vec<MarketAnalysis>,
    pub action: Action,
    pub action_reasoning: String,
    pub risk_level: RiskLevel,
    /// Summary of external research, when an analyst produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_summary: Option<String>,
    /// Identifier of whoever produced this research
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyst: Option<String>,
}

impl EventResearch {
    /// Relative store path for this event in a given run
    pub fn path(event_id: &str, run_id: &str) -> String {
        format!("{}/{}/{}.json", crate::data::RESEARCH_DIR, event_id, run_id)
    }

    /// Market with the largest absolute edge, first seen on ties
    pub fn top_market(&self) -> Option<&MarketAnalysis> {
        top_analysis(&self.markets)
    }

    /// Largest absolute edge across markets, zero when there are none
    pub fn top_edge(&self) -> Decimal {
        self.top_market()
            .map(|m| m.edge.abs())
            .unwrap_or(Decimal::ZERO)
    }
}

/// One actionable line in a daily actions file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecommendation {
    pub event_id: String,
    pub title: String,
    pub action: Action,
    pub action_reasoning: String,
    pub top_edge: Decimal,
    pub confidence: Confidence,
    pub risk_level: RiskLevel,
    pub timestamp: DateTime<Utc>,
}

impl From<&EventResearch> for ActionRecommendation {
    fn from(research: &EventResearch) -> Self {
        Self {
            event_id: research.event_id.clone(),
            title: research.title.clone(),
            action: research.action,
            action_reasoning: research.action_reasoning.clone(),
            top_edge: research.top_edge(),
            confidence: research
                .top_market()
                .map(|m| m.confidence)
                .unwrap_or_default(),
            risk_level: research.risk_level,
            timestamp: research.timestamp,
        }
    }
}

/// All actionable recommendations from one research run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActions {
    pub timestamp: DateTime<Utc>,
    pub recommendations: Vec<ActionRecommendation>,
}

impl DailyActions {
    /// Collect every non-SKIP result
    pub fn from_results(timestamp: DateTime<Utc>, results: &[EventResearch]) -> Self {
        Self {
            timestamp,
            recommendations: results
                .iter()
                .filter(|r| r.action != Action::Skip)
                .map(ActionRecommendation::from)
                .collect(),
        }
    }

    /// Relative store path for a run
    pub fn path(run_id: &str) -> String {
        format!("{}/{}.json", crate::data::ACTIONS_DIR, run_id)
    }

    /// Recommendations ordered by descending absolute edge
    pub fn sorted_by_edge(&self) -> Vec<&ActionRecommendation> {
        let mut sorted: Vec<_> = self.recommendations.iter().collect();
        sorted.sort_by(|a, b| b.top_edge.abs().cmp(&a.top_edge.abs()));
        sorted
    }
}
