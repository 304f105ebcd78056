//! Derived event views assembled at the boundary.
//!
//! The canonical [`Event`] record carries no per-user or aggregate state.
//! When the API layer returns query results it merges in the requesting
//! user's favorite set and a ticket-count aggregate, producing [`EventView`]
//! rows. The merge is recomputed on every request, so the view can never
//! drift from the records it is derived from.

use crate::types::{Event, EventId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// An [`Event`] enriched with derived, per-request fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventView {
    /// The canonical record
    #[serde(flatten)]
    pub event: Event,
    /// Whether the requesting user has favorited this event
    pub is_favorite: bool,
    /// Number of tickets referencing this event
    pub attendees_count: u32,
    /// Display string for the price range (e.g. `"$25 - $100"`)
    pub price_range: String,
}

impl EventView {
    /// Merge derived state onto a single record.
    #[must_use]
    pub fn assemble(
        event: Event,
        favorites: &HashSet<EventId>,
        attendee_counts: &HashMap<EventId, u32>,
    ) -> Self {
        let is_favorite = favorites.contains(&event.id);
        let attendees_count = attendee_counts.get(&event.id).copied().unwrap_or(0);
        let price_range = event.price_range_label();
        Self {
            event,
            is_favorite,
            attendees_count,
            price_range,
        }
    }
}

/// Merge derived state onto a page of query results, preserving order.
///
/// `favorites` is the requesting user's favorite event set;
/// `attendee_counts` maps each event to its ticket count. Events absent from
/// either map get `false` / `0`.
#[must_use]
pub fn assemble_views(
    events: Vec<Event>,
    favorites: &HashSet<EventId>,
    attendee_counts: &HashMap<EventId, u32>,
) -> Vec<EventView> {
    events
        .into_iter()
        .map(|event| EventView::assemble(event, favorites, attendee_counts))
        .collect()
}
