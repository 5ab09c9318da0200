//! Market data module
//!
//! Fetches active events from Polymarket's Gamma API, pages through the
//! full event list, and filters/projects events for the CLI.

mod compact;
mod filter;
mod gamma;
mod paging;
mod types;

pub use compact::{CompactEvent, CompactMarket};
pub use filter::EventFilter;
pub use gamma::{GammaClient, GammaConfig, GammaError, GAMMA_API_URL};
pub use paging::{fetch_all_active_events, Paging, DEFAULT_PAGE_SIZE};
pub use types::{parse_price, Event, Market, MarketDataError, StringList};

use async_trait::async_trait;

/// Query parameters for the `/events` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventQuery {
    pub active: bool,
    pub closed: bool,
    pub limit: u32,
    pub offset: u32,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            active: true,
            closed: false,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl EventQuery {
    /// Active, open events starting at `offset`
    pub fn active_page(limit: u32, offset: u32) -> Self {
        Self {
            limit,
            offset,
            ..Default::default()
        }
    }

    /// Query string pairs, ordered by volume descending
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("active", self.active.to_string()),
            ("closed", self.closed.to_string()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
            ("order", "volume".to_string()),
            ("ascending", "false".to_string()),
        ]
    }
}

/// Anything that can serve pages of events
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch one page of events
    async fn fetch_events(&self, query: &EventQuery) -> anyhow::Result<Vec<Event>>;
}
