//! Per-market analysis

use super::{MarketAnalysis, PriceQuote, ProbabilityEstimator};
use crate::market::{Market, MarketDataError};

/// Analyze one market against an estimator
///
/// Index 0 of the paired outcome/price lists is Yes, index 1 is No. Markets
/// whose lists differ in length or carry fewer than two prices are rejected
/// rather than priced at zero.
pub fn analyze_market<E>(market: &Market, estimator: &E) -> Result<MarketAnalysis, MarketDataError>
where
    E: ProbabilityEstimator + ?Sized,
{
    let (yes, no) = market.yes_no_prices()?;
    let estimate = estimator.estimate(market, yes);

    Ok(MarketAnalysis {
        market_id: market.id.clone(),
        question: market.question.clone(),
        current_price: PriceQuote { yes, no },
        estimated_probability: estimate.probability,
        edge: estimate.probability - yes,
        confidence: estimate.confidence,
        sources: estimate.sources,
        reasoning: estimate.reasoning,
    })
}
