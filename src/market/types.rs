//! Gamma event and market types
//!
//! Fields this crate reads are typed; everything else the API sends is kept
//! in `extra` so snapshots reproduce the upstream payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

/// Errors decoding the outcome/price fields of a market
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// A stringified list could not be parsed
    #[error("market {market_id}: malformed {field} list: {source}")]
    MalformedList {
        market_id: String,
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// A price entry is not a decimal number
    #[error("market {market_id}: invalid price {value:?}")]
    InvalidPrice { market_id: String, value: String },
    /// Outcomes and prices are not positionally paired
    #[error("market {market_id}: {outcomes} outcomes but {prices} prices")]
    LengthMismatch {
        market_id: String,
        outcomes: usize,
        prices: usize,
    },
    /// Fewer than the two prices a yes/no analysis needs
    #[error("market {market_id}: expected yes and no prices, got {count}")]
    MissingPrices { market_id: String, count: usize },
}

/// A list field that Gamma sends either as a JSON-encoded string
/// (`"[\"Yes\", \"No\"]"`) or as a plain array.
///
/// The incoming shape is kept so it serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    /// Stringified JSON array
    Encoded(String),
    /// Already-decoded array
    List(Vec<String>),
}

impl Default for StringList {
    fn default() -> Self {
        StringList::List(Vec::new())
    }
}

impl StringList {
    /// Decode into owned entries
    pub fn decode(&self) -> Result<Vec<String>, serde_json::Error> {
        match self {
            StringList::Encoded(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            StringList::Encoded(raw) => serde_json::from_str(raw),
            StringList::List(items) => Ok(items.clone()),
        }
    }
}

/// A single binary (or multi-outcome) market within an event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Outcome labels, positionally paired with `outcome_prices`
    #[serde(default, deserialize_with = "de_null_default")]
    pub outcomes: StringList,
    /// Outcome prices as decimal strings in [0, 1]
    #[serde(default, deserialize_with = "de_null_default")]
    pub outcome_prices: StringList,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_opt_string_or_number"
    )]
    pub volume: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_opt_string_or_number"
    )]
    pub liquidity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Market {
    /// Decoded outcome labels
    pub fn outcome_labels(&self) -> Result<Vec<String>, MarketDataError> {
        self.outcomes
            .decode()
            .map_err(|source| MarketDataError::MalformedList {
                market_id: self.id.clone(),
                field: "outcomes",
                source,
            })
    }

    /// Decoded outcome prices
    pub fn prices(&self) -> Result<Vec<Decimal>, MarketDataError> {
        let raw = self
            .outcome_prices
            .decode()
            .map_err(|source| MarketDataError::MalformedList {
                market_id: self.id.clone(),
                field: "outcomePrices",
                source,
            })?;

        raw.iter()
            .map(|p| {
                parse_price(p).ok_or_else(|| MarketDataError::InvalidPrice {
                    market_id: self.id.clone(),
                    value: p.clone(),
                })
            })
            .collect()
    }

    /// Outcome labels zipped with their prices
    ///
    /// Fails when the two lists differ in length.
    pub fn priced_outcomes(&self) -> Result<Vec<(String, Decimal)>, MarketDataError> {
        let outcomes = self.outcome_labels()?;
        let prices = self.prices()?;

        if outcomes.len() != prices.len() {
            return Err(MarketDataError::LengthMismatch {
                market_id: self.id.clone(),
                outcomes: outcomes.len(),
                prices: prices.len(),
            });
        }

        Ok(outcomes.into_iter().zip(prices).collect())
    }

    /// Yes (index 0) and No (index 1) prices
    pub fn yes_no_prices(&self) -> Result<(Decimal, Decimal), MarketDataError> {
        let priced = self.priced_outcomes()?;
        match priced.as_slice() {
            [(_, yes), (_, no), ..] => Ok((*yes, *no)),
            _ => Err(MarketDataError::MissingPrices {
                market_id: self.id.clone(),
                count: priced.len(),
            }),
        }
    }
}

/// A prediction-market event grouping one or more markets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub markets: Vec<Market>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Total volume, zero when the API omits it
    pub fn volume_or_zero(&self) -> Decimal {
        self.volume.unwrap_or(Decimal::ZERO)
    }

    /// Total liquidity, zero when the API omits it
    pub fn liquidity_or_zero(&self) -> Decimal {
        self.liquidity.unwrap_or(Decimal::ZERO)
    }
}

/// Parse a price string, accepting scientific notation ("1e-7")
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Treat an explicit `null` like a missing key
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn de_opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        U64(u64),
        I64(i64),
        F64(f64),
        Null(Option<()>),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => Some(s),
        Raw::U64(n) => Some(n.to_string()),
        Raw::I64(n) => Some(n.to_string()),
        Raw::F64(n) => Some(n.to_string()),
        Raw::Null(_) => None,
    })
}
