//! Point-in-time metrics snapshot with period-over-period growth.

use chrono::{DateTime, Duration, Utc};
use evently_core::{Event, EventId, Money, Ticket};
use serde::Serialize;
use std::collections::HashSet;

/// Length of each growth comparison window, in days.
///
/// Growth compares the trailing window `(now - 30d, now]` to the preceding
/// window `(now - 60d, now - 30d]`.
pub const GROWTH_WINDOW_DAYS: i64 = 30;

/// Dashboard metrics snapshot.
///
/// Each headline figure is paired with its period-over-period change.
/// `tickets_growth`, `revenue_growth`, and `attendees_growth` are
/// percentages; `events_growth` is a raw count difference.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsMetrics {
    /// Total tickets sold, all time
    pub tickets_sold: usize,
    /// Percentage change in tickets sold, window over window
    pub tickets_growth: i32,
    /// Total revenue, all time
    pub revenue: Money,
    /// Percentage change in revenue, window over window
    pub revenue_growth: i32,
    /// Events whose date is in the future
    pub active_events: usize,
    /// Difference in events created, window over window (raw count)
    pub events_growth: i64,
    /// Total attendees across events (per-event ticket counts)
    pub attendees: usize,
    /// Approximate attendee growth: average of ticket and revenue growth
    pub attendees_growth: i32,
}

/// Percentage growth of `current` over `previous`, rounded to the nearest
/// integer. Defined as 0 when the previous window is empty.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn percent_growth(current: u64, previous: u64) -> i32 {
    if previous == 0 {
        return 0;
    }
    let current = current as f64;
    let previous = previous as f64;
    (((current - previous) / previous) * 100.0).round() as i32
}

/// Compute the metrics snapshot.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) fn compute(events: &[Event], tickets: &[Ticket], now: DateTime<Utc>) -> AnalyticsMetrics {
    let window = Duration::days(GROWTH_WINDOW_DAYS);
    let window_start = now - window;
    let previous_start = window_start - window;

    let tickets_sold = tickets.len();
    let revenue = Money::sum(tickets.iter().map(|t| t.price));

    let in_window = |at: DateTime<Utc>| at > window_start && at <= now;
    let in_previous = |at: DateTime<Utc>| at > previous_start && at <= window_start;

    let current_tickets = tickets.iter().filter(|t| in_window(t.purchased_at)).count();
    let previous_tickets = tickets
        .iter()
        .filter(|t| in_previous(t.purchased_at))
        .count();
    let tickets_growth = percent_growth(current_tickets as u64, previous_tickets as u64);

    let current_revenue = Money::sum(
        tickets
            .iter()
            .filter(|t| in_window(t.purchased_at))
            .map(|t| t.price),
    );
    let previous_revenue = Money::sum(
        tickets
            .iter()
            .filter(|t| in_previous(t.purchased_at))
            .map(|t| t.price),
    );
    let revenue_growth = percent_growth(current_revenue.cents(), previous_revenue.cents());

    let active_events = events.iter().filter(|e| e.is_upcoming(now)).count();

    let current_events = events.iter().filter(|e| in_window(e.created_at)).count();
    let previous_events = events.iter().filter(|e| in_previous(e.created_at)).count();
    let events_growth = current_events as i64 - previous_events as i64;

    // Attendee counters are derived: each event's counter is the number of
    // tickets referencing it, so dangling tickets are excluded from the sum
    let known_events: HashSet<EventId> = events.iter().map(|e| e.id).collect();
    let attendees = tickets
        .iter()
        .filter(|t| known_events.contains(&t.event_id))
        .count();

    // Approximation: no independent attendee measurement exists, so average
    // the two growth rates we do measure
    #[allow(clippy::cast_possible_truncation)]
    let attendees_growth =
        ((f64::from(tickets_growth) + f64::from(revenue_growth)) / 2.0).round() as i32;

    AnalyticsMetrics {
        tickets_sold,
        tickets_growth,
        revenue,
        revenue_growth,
        active_events,
        events_growth,
        attendees,
        attendees_growth,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_growth_rounds() {
        assert_eq!(percent_growth(150, 100), 50);
        assert_eq!(percent_growth(100, 150), -33);
        assert_eq!(percent_growth(1, 3), -67);
    }

    #[test]
    fn test_percent_growth_empty_previous_window_is_zero() {
        assert_eq!(percent_growth(5, 0), 0);
        assert_eq!(percent_growth(0, 0), 0);
    }
}
