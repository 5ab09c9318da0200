//! Probability estimators
//!
//! An estimator turns a market and its observed Yes price into an estimated
//! probability. Real models (statistical or LLM-backed) plug in here.

use super::Confidence;
use crate::market::Market;
use rust_decimal::Decimal;

/// An estimated Yes probability with supporting detail
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub probability: Decimal,
    pub confidence: Confidence,
    pub reasoning: String,
    pub sources: Vec<String>,
}

/// Trait for probability estimators
pub trait ProbabilityEstimator: Send + Sync {
    /// Estimate the probability that `market` resolves Yes
    fn estimate(&self, market: &Market, yes_price: Decimal) -> Estimate;
}

impl<E: ProbabilityEstimator + ?Sized> ProbabilityEstimator for &E {
    fn estimate(&self, market: &Market, yes_price: Decimal) -> Estimate {
        (**self).estimate(market, yes_price)
    }
}

/// Takes the market price at face value, so edge is always zero
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineEstimator;

impl ProbabilityEstimator for BaselineEstimator {
    fn estimate(&self, _market: &Market, yes_price: Decimal) -> Estimate {
        Estimate {
            probability: yes_price,
            confidence: Confidence::Low,
            reasoning: "Baseline analysis: no external research performed yet.".to_string(),
            sources: vec![],
        }
    }
}
