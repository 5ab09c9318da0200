//! Full-walk pagination through the command context

use async_trait::async_trait;
use poly_agent::market::{Event, EventQuery, EventSource};
use std::sync::Arc;
use tempfile::TempDir;

use crate::support::{context, event, FlakySource, StaticSource};

#[tokio::test]
async fn test_fetch_all_walks_every_page() {
    let dir = TempDir::new().unwrap();
    let events = (0..5).map(|i| event(&i.to_string(), 10.0, "0.5")).collect();
    let ctx = context(StaticSource::new(events), dir.path());

    let fetched = ctx.fetch_all().await.unwrap();
    let ids: Vec<_> = fetched.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
}

#[tokio::test]
async fn test_fetch_page_requests_active_by_volume() {
    let dir = TempDir::new().unwrap();
    let source = StaticSource::new((0..5).map(|i| event(&i.to_string(), 10.0, "0.5")).collect());
    let source = Arc::new(source);

    let ctx = context(SharedSource(source.clone()), dir.path());
    let fetched = ctx.fetch(false, 3).await.unwrap();

    assert_eq!(fetched.len(), 3);
    assert_eq!(
        *source.queries.lock().unwrap(),
        vec![EventQuery::active_page(3, 0)]
    );

    let pairs = EventQuery::active_page(3, 0).to_query_pairs();
    assert!(pairs.contains(&("order", "volume".to_string())));
    assert!(pairs.contains(&("ascending", "false".to_string())));
}

#[tokio::test]
async fn test_page_error_aborts_walk() {
    let dir = TempDir::new().unwrap();
    let ctx = context(FlakySource { ok_pages: 2 }, dir.path());

    let err = ctx.fetch_all().await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_page_limit_returns_partial_list() {
    let dir = TempDir::new().unwrap();
    let mut ctx = context(FlakySource { ok_pages: u32::MAX }, dir.path());
    ctx.paging.max_pages = 4;

    let fetched = ctx.fetch_all().await.unwrap();
    assert_eq!(fetched.len(), 8);
}

/// Lets a test keep a handle on a source owned by the context
struct SharedSource(Arc<StaticSource>);

#[async_trait]
impl EventSource for SharedSource {
    async fn fetch_events(&self, query: &EventQuery) -> anyhow::Result<Vec<Event>> {
        self.0.fetch_events(query).await
    }
}
