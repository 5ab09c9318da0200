//! Reduced event projection used by `export`

use super::{Event, Market, MarketDataError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A market with decoded outcomes and numeric prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactMarket {
    pub id: String,
    pub question: String,
    pub outcomes: Vec<String>,
    pub prices: Vec<Decimal>,
    pub liquidity: Option<String>,
    pub volume: Option<String>,
    pub end_date: Option<String>,
}

/// An event reduced to the fields worth handing to an analyst
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub volume: Decimal,
    pub liquidity: Decimal,
    pub end_date: Option<String>,
    pub markets: Vec<CompactMarket>,
}

impl TryFrom<&Market> for CompactMarket {
    type Error = MarketDataError;

    fn try_from(market: &Market) -> Result<Self, Self::Error> {
        Ok(Self {
            id: market.id.clone(),
            question: market.question.clone(),
            outcomes: market.outcome_labels()?,
            prices: market.prices()?,
            liquidity: market.liquidity.clone(),
            volume: market.volume.clone(),
            end_date: market.end_date.clone(),
        })
    }
}

impl TryFrom<&Event> for CompactEvent {
    type Error = MarketDataError;

    fn try_from(event: &Event) -> Result<Self, Self::Error> {
        let markets = event
            .markets
            .iter()
            .map(CompactMarket::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            volume: event.volume_or_zero(),
            liquidity: event.liquidity_or_zero(),
            end_date: event.end_date.clone(),
            markets,
        })
    }
}
