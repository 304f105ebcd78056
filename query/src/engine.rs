//! The event query engine: filter, order, paginate.

use chrono::{DateTime, Utc};
use evently_core::Event;
use serde::Serialize;

use crate::error::QueryError;
use crate::filter::EventFilter;

/// Page size used by the events listing (9 cards per page).
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Pagination metadata accompanying a page of results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// The requested (1-based) page
    pub current_page: u32,
    /// Total pages after filtering; 0 when nothing matched
    pub total_pages: u32,
    /// Total matching events, independent of the requested page
    pub total_items: usize,
    /// Page size the totals were computed with
    pub page_size: usize,
}

/// One page of query results plus pagination metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventPage {
    /// Matching events for the requested page, ordered by date ascending
    pub events: Vec<Event>,
    /// Pagination metadata
    pub pagination: Pagination,
}

/// Pure filtering/pagination engine over an event snapshot.
///
/// Holds only a page size; every query receives the snapshot and `now`
/// explicitly, so identical inputs always produce identical output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventQueryEngine {
    page_size: usize,
}

impl EventQueryEngine {
    /// Creates an engine with the default page size.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Creates an engine with a custom page size.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPageSize`] when `page_size` is zero.
    pub const fn with_page_size(page_size: usize) -> Result<Self, QueryError> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize);
        }
        Ok(Self { page_size })
    }

    /// The configured page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Filter, order, and paginate a snapshot of events.
    ///
    /// Filters are conjunctive; results are ordered ascending by event date.
    /// `page` is 1-based. A page past the end of the results yields an empty
    /// slice with the totals intact.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPage`] when `page` is zero. Zero matches
    /// are a valid outcome, not an error.
    pub fn query(
        &self,
        events: &[Event],
        filter: &EventFilter,
        page: u32,
        now: DateTime<Utc>,
    ) -> Result<EventPage, QueryError> {
        if page == 0 {
            return Err(QueryError::InvalidPage { page });
        }

        let today = now.date_naive();
        let mut matching: Vec<&Event> = events
            .iter()
            .filter(|event| filter.matches(event, today))
            .collect();

        // Soonest first; stable, so equal dates keep snapshot order
        matching.sort_by_key(|event| event.date);

        let total_items = matching.len();
        let total_pages = u32::try_from(total_items.div_ceil(self.page_size)).unwrap_or(u32::MAX);

        let start = usize::try_from(page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(self.page_size);
        let page_events: Vec<Event> = matching
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        tracing::debug!(
            total_items,
            total_pages,
            page,
            returned = page_events.len(),
            "event query evaluated"
        );

        Ok(EventPage {
            events: page_events,
            pagination: Pagination {
                current_page: page,
                total_pages,
                total_items,
                page_size: self.page_size,
            },
        })
    }
}

impl Default for EventQueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
