//! Event filtering by volume, liquidity, category and free text

use super::Event;
use rust_decimal::Decimal;

/// Filters applied to fetched events before research or export
///
/// Unset (or non-positive) minimums and empty strings disable their check.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Minimum event volume
    pub min_volume: Option<Decimal>,
    /// Minimum event liquidity
    pub min_liquidity: Option<Decimal>,
    /// Substring of any market's category (case-insensitive)
    pub category: Option<String>,
    /// Substring of the title, description or any market question
    pub search: Option<String>,
}

impl EventFilter {
    /// Check a single event against every configured filter
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(min) = self.min_volume.filter(|m| *m > Decimal::ZERO) {
            if event.volume_or_zero() < min {
                return false;
            }
        }

        if let Some(min) = self.min_liquidity.filter(|m| *m > Decimal::ZERO) {
            if event.liquidity_or_zero() < min {
                return false;
            }
        }

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            let category = category.to_lowercase();
            let in_category = event.markets.iter().any(|m| {
                m.category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&category))
            });
            if !in_category {
                return false;
            }
        }

        match self.search.as_deref() {
            Some(query) => matches_search(event, query),
            None => true,
        }
    }

    /// Keep matching events, preserving order
    pub fn apply(&self, events: Vec<Event>) -> Vec<Event> {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }
}

fn matches_search(event: &Event, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |text: &str| text.to_lowercase().contains(&needle);

    contains(event.title.as_str())
        || event.description.as_deref().is_some_and(contains)
        || event.markets.iter().any(|m| contains(m.question.as_str()))
}
