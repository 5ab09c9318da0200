//! Event-level action decision

use super::{top_analysis, Action, MarketAnalysis, RiskLevel};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Edge thresholds driving the action decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPolicy {
    /// Absolute edge below which an event is skipped
    pub significance: Decimal,
    /// Absolute edge above which a trade is high risk
    pub high_risk: Decimal,
}

impl Default for ActionPolicy {
    fn default() -> Self {
        Self {
            significance: dec!(0.05),
            high_risk: dec!(0.15),
        }
    }
}

/// Chosen action with its explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDecision {
    pub action: Action,
    pub reasoning: String,
    pub risk_level: RiskLevel,
}

impl ActionPolicy {
    /// Decide what to do about an event from its market analyses
    pub fn decide(&self, markets: &[MarketAnalysis]) -> ActionDecision {
        let best = top_analysis(markets);

        let max_edge = best.map(|m| m.edge.abs()).unwrap_or(Decimal::ZERO);

        let best = match best {
            Some(best) if max_edge >= self.significance => best,
            _ => {
                return ActionDecision {
                    action: Action::Skip,
                    reasoning: "No significant edge detected. Market prices appear efficient."
                        .to_string(),
                    risk_level: RiskLevel::Low,
                }
            }
        };

        let risk_level = if max_edge > self.high_risk {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        };

        if best.edge > self.significance {
            return ActionDecision {
                action: Action::BuyYes,
                reasoning: format!(
                    "Market underpricing YES on \"{}\" by {:.1}%",
                    best.question,
                    percent(best.edge)
                ),
                risk_level,
            };
        }

        if best.edge < -self.significance {
            return ActionDecision {
                action: Action::BuyNo,
                reasoning: format!(
                    "Market overpricing YES on \"{}\" by {:.1}%",
                    best.question,
                    percent(best.edge.abs())
                ),
                risk_level,
            };
        }

        // Only reached when the top edge sits exactly on the threshold.
        ActionDecision {
            action: Action::Hold,
            reasoning: "Edge is marginal. Monitor for changes.".to_string(),
            risk_level: RiskLevel::Low,
        }
    }
}

/// Edge in percent, rounded half away from zero to one place
fn percent(edge: Decimal) -> Decimal {
    (edge * dec!(100)).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Decide with the default thresholds
pub fn determine_action(markets: &[MarketAnalysis]) -> ActionDecision {
    ActionPolicy::default().decide(markets)
}
