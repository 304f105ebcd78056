//! Per-category ticket and revenue breakdowns.

use evently_core::{Category, Event, EventId, Money, Ticket};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Which column the category breakdown is ranked by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryView {
    /// Rank by ticket count, descending
    Tickets,
    /// Rank by revenue, descending
    #[default]
    Revenue,
}

impl CategoryView {
    /// Parse a view code; anything other than `"tickets"` ranks by revenue.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code == "tickets" {
            Self::Tickets
        } else {
            Self::Revenue
        }
    }
}

impl<'de> Deserialize<'de> for CategoryView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}

/// Aggregate sales for one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventCategoryStat {
    /// The category
    pub category: Category,
    /// Tickets sold across this category's events
    pub ticket_count: usize,
    /// Revenue across this category's events
    pub revenue: Money,
}

/// Aggregate tickets and revenue per category observed among the events.
///
/// Every category that has at least one event gets a row, even with zero
/// sales. Tickets whose event is missing from the snapshot are skipped.
pub(crate) fn compute(
    events: &[Event],
    tickets: &[Ticket],
    view: CategoryView,
) -> Vec<EventCategoryStat> {
    let categories: HashMap<EventId, Category> =
        events.iter().map(|e| (e.id, e.category)).collect();

    // Seed with every observed category so zero-sales rows are present
    let mut totals: HashMap<Category, (usize, Money)> = events
        .iter()
        .map(|e| (e.category, (0, Money::ZERO)))
        .collect();

    for ticket in tickets {
        let Some(category) = categories.get(&ticket.event_id) else {
            continue;
        };
        let entry = totals.entry(*category).or_insert((0, Money::ZERO));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(ticket.price);
    }

    let mut stats: Vec<EventCategoryStat> = totals
        .into_iter()
        .map(|(category, (ticket_count, revenue))| EventCategoryStat {
            category,
            ticket_count,
            revenue,
        })
        .collect();

    match view {
        CategoryView::Tickets => stats.sort_by_key(|s| Reverse(s.ticket_count)),
        CategoryView::Revenue => stats.sort_by_key(|s| Reverse(s.revenue.cents())),
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_codes() {
        assert_eq!(CategoryView::from_code("tickets"), CategoryView::Tickets);
        assert_eq!(CategoryView::from_code("revenue"), CategoryView::Revenue);
        assert_eq!(CategoryView::from_code("anything"), CategoryView::Revenue);
    }
}
