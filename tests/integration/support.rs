//! In-memory event sources and fixtures

use async_trait::async_trait;
use poly_agent::cli::Context;
use poly_agent::config::ResearchConfig;
use poly_agent::data::FileStore;
use poly_agent::market::{Event, EventQuery, EventSource, Paging};
use poly_agent::research::BaselineEstimator;
use serde_json::json;
use std::path::Path;
use std::sync::Mutex;

/// Serves a fixed event list, honoring limit and offset
pub struct StaticSource {
    events: Vec<Event>,
    pub queries: Mutex<Vec<EventQuery>>,
}

impl StaticSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            queries: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl EventSource for StaticSource {
    async fn fetch_events(&self, query: &EventQuery) -> anyhow::Result<Vec<Event>> {
        self.queries.lock().unwrap().push(*query);
        let start = (query.offset as usize).min(self.events.len());
        let end = (start + query.limit as usize).min(self.events.len());
        Ok(self.events[start..end].to_vec())
    }
}

/// Fails every request after `ok_pages` full pages
pub struct FlakySource {
    pub ok_pages: u32,
}

#[async_trait]
impl EventSource for FlakySource {
    async fn fetch_events(&self, query: &EventQuery) -> anyhow::Result<Vec<Event>> {
        if query.offset / query.limit.max(1) >= self.ok_pages {
            anyhow::bail!("Polymarket API error: 503 Service Unavailable");
        }
        Ok((0..query.limit)
            .map(|i| event(&format!("f{}", query.offset + i), 0.0, "0.5"))
            .collect())
    }
}

/// Event with one Yes/No market priced at `yes`
pub fn event(id: &str, volume: f64, yes: &str) -> Event {
    let no = format!("{}", 1.0 - yes.parse::<f64>().unwrap());
    serde_json::from_value(json!({
        "id": id,
        "title": format!("Event {}", id),
        "slug": format!("event-{}", id),
        "volume": volume,
        "liquidity": volume / 10.0,
        "endDate": "2026-12-31T00:00:00Z",
        "markets": [{
            "id": format!("{}-m", id),
            "question": format!("Will {} happen?", id),
            "outcomes": "[\"Yes\", \"No\"]",
            "outcomePrices": format!("[\"{}\", \"{}\"]", yes, no),
            "category": "Politics",
        }],
    }))
    .unwrap()
}

/// Context over `source` writing into `root`
pub fn context(source: impl EventSource + 'static, root: &Path) -> Context {
    Context {
        source: Box::new(source),
        store: FileStore::new(root),
        paging: Paging {
            page_size: 2,
            max_pages: 50,
        },
        research: ResearchConfig::default(),
        estimator: Box::new(BaselineEstimator),
    }
}
