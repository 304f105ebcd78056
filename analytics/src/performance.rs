//! Fill-rate performance for upcoming events.

use chrono::{DateTime, Utc};
use evently_core::{Event, Money, Ticket};
use serde::Serialize;

/// Number of upcoming events the performance view returns.
///
/// A fixed dashboard-widget limit, not a general query parameter.
pub const TOP_UPCOMING_LIMIT: usize = 3;

/// Sales-health classification for an upcoming event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PerformanceStatus {
    /// Fill rate at or above 80%
    #[serde(rename = "On Track")]
    OnTrack,
    /// Fill rate at or above 60%, below 80%
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    /// Fill rate below 60%
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl PerformanceStatus {
    /// Classify a fill rate. Boundaries are inclusive on the lower end:
    /// exactly 0.8 is `OnTrack`, exactly 0.6 is `NeedsAttention`.
    #[must_use]
    pub fn classify(fill_rate: f64) -> Self {
        if fill_rate >= 0.8 {
            Self::OnTrack
        } else if fill_rate >= 0.6 {
            Self::NeedsAttention
        } else {
            Self::AtRisk
        }
    }
}

/// An upcoming event with its sales figures and classification.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventPerformance {
    /// The event
    #[serde(flatten)]
    pub event: Event,
    /// Tickets referencing this event
    pub tickets_sold: usize,
    /// Venue capacity
    pub capacity: u32,
    /// Revenue from this event's tickets
    pub revenue: Money,
    /// `tickets_sold / capacity`; 0 when capacity is 0
    pub fill_rate: f64,
    /// Classification of the fill rate
    pub status: PerformanceStatus,
}

/// Rank upcoming events by date and report the nearest few.
///
/// Past events are excluded. A zero capacity (possible in snapshots that
/// bypassed record validation) yields a fill rate of 0 and `AtRisk` rather
/// than a division fault.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn compute(
    events: &[Event],
    tickets: &[Ticket],
    now: DateTime<Utc>,
) -> Vec<EventPerformance> {
    let mut upcoming: Vec<EventPerformance> = events
        .iter()
        .filter(|event| event.is_upcoming(now))
        .map(|event| {
            let event_tickets: Vec<&Ticket> =
                tickets.iter().filter(|t| t.event_id == event.id).collect();
            let tickets_sold = event_tickets.len();
            let revenue = Money::sum(event_tickets.iter().map(|t| t.price));
            let fill_rate = if event.capacity == 0 {
                0.0
            } else {
                tickets_sold as f64 / f64::from(event.capacity)
            };
            EventPerformance {
                event: event.clone(),
                tickets_sold,
                capacity: event.capacity,
                revenue,
                fill_rate,
                status: PerformanceStatus::classify(fill_rate),
            }
        })
        .collect();

    upcoming.sort_by_key(|p| p.event.date);
    upcoming.truncate(TOP_UPCOMING_LIMIT);
    upcoming
}
