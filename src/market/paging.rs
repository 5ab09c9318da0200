//! Offset pagination over the events endpoint

use super::{Event, EventQuery, EventSource};

/// Page size used when walking every active event
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default ceiling on pages fetched in one walk
pub const DEFAULT_MAX_PAGES: u32 = 200;

/// Pagination settings for a full walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    /// Events requested per page
    pub page_size: u32,
    /// Stop after this many pages even if the last one was full
    pub max_pages: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Fetch every active event, one page at a time
///
/// Stops at the first page shorter than `page_size`. Any page error aborts
/// the walk, as does a zero page size or page limit. Results are not
/// deduplicated; the upstream list can shift between pages.
pub async fn fetch_all_active_events<S>(source: &S, paging: Paging) -> anyhow::Result<Vec<Event>>
where
    S: EventSource + ?Sized,
{
    if paging.page_size == 0 {
        anyhow::bail!("page size must be greater than zero");
    }
    if paging.max_pages == 0 {
        anyhow::bail!("max pages must be greater than zero");
    }

    let mut events = Vec::new();
    let mut offset = 0u32;

    for page in 0..paging.max_pages {
        let query = EventQuery::active_page(paging.page_size, offset);
        let batch = source.fetch_events(&query).await?;
        let count = batch.len();

        tracing::debug!(page, offset, count, "Fetched events page");
        events.extend(batch);

        if count < paging.page_size as usize {
            tracing::info!(total = events.len(), pages = page + 1, "Fetched all active events");
            return Ok(events);
        }

        offset = offset.saturating_add(paging.page_size);
    }

    tracing::warn!(
        max_pages = paging.max_pages,
        total = events.len(),
        "Page limit reached before a short page; returning partial event list"
    );
    Ok(events)
}
