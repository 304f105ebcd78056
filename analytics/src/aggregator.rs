//! The aggregator facade.

use chrono::{DateTime, Utc};
use evently_core::{Event, Ticket};

use crate::categories::{self, CategoryView, EventCategoryStat};
use crate::error::AnalyticsError;
use crate::metrics::{self, AnalyticsMetrics};
use crate::monthly::{self, MonthlyStat};
use crate::performance::{self, EventPerformance};

// ============================================================================
// Aggregator
// ============================================================================

/// Stateless entry point for the analytics views.
///
/// Every method takes the event/ticket snapshot and an explicit `now`, so
/// results are reproducible: the same snapshot and instant always produce
/// the same output.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalyticsAggregator;

impl AnalyticsAggregator {
    /// Create an aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Headline metrics with period-over-period growth.
    #[must_use]
    pub fn metrics(
        &self,
        events: &[Event],
        tickets: &[Ticket],
        now: DateTime<Utc>,
    ) -> AnalyticsMetrics {
        let snapshot = metrics::compute(events, tickets, now);
        tracing::debug!(
            tickets_sold = snapshot.tickets_sold,
            active_events = snapshot.active_events,
            "computed metrics snapshot"
        );
        snapshot
    }

    /// Dense monthly revenue series over a trailing lookback of `days`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidLookback`] when `days` is zero.
    pub fn monthly_revenue(
        &self,
        tickets: &[Ticket],
        days: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<MonthlyStat>, AnalyticsError> {
        let series = monthly::compute(tickets, days, now)?;
        tracing::debug!(days, months = series.len(), "computed monthly revenue");
        Ok(series)
    }

    /// Per-category breakdown, ranked per `view`.
    #[must_use]
    pub fn category_stats(
        &self,
        events: &[Event],
        tickets: &[Ticket],
        view: CategoryView,
    ) -> Vec<EventCategoryStat> {
        let stats = categories::compute(events, tickets, view);
        tracing::debug!(?view, categories = stats.len(), "computed category stats");
        stats
    }

    /// Fill-rate performance for the nearest upcoming events.
    #[must_use]
    pub fn event_performance(
        &self,
        events: &[Event],
        tickets: &[Ticket],
        now: DateTime<Utc>,
    ) -> Vec<EventPerformance> {
        let ranked = performance::compute(events, tickets, now);
        tracing::debug!(upcoming = ranked.len(), "computed event performance");
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_has_defined_results() {
        let aggregator = AnalyticsAggregator::new();
        let now = Utc::now();

        let metrics = aggregator.metrics(&[], &[], now);
        assert_eq!(metrics.tickets_sold, 0);
        assert_eq!(metrics.tickets_growth, 0);
        assert_eq!(metrics.events_growth, 0);

        assert!(aggregator.event_performance(&[], &[], now).is_empty());
        assert!(aggregator
            .category_stats(&[], &[], CategoryView::Revenue)
            .is_empty());
    }
}
