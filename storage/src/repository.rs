//! The repository abstraction.

use chrono::{DateTime, Utc};
use evently_core::{Event, EventId, Favorite, NewEvent, Ticket, TicketType, UserId};
use std::collections::{HashMap, HashSet};

use crate::error::StorageError;

/// Persistence seam for events, tickets and favorites.
///
/// Reads return owned snapshots so the query and analytics engines can run
/// over them without holding a borrow of the store. Write methods take an
/// explicit `now` so callers control the clock; the repository never reads
/// wall time itself.
pub trait Repository {
    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// All event records.
    fn events(&self) -> Vec<Event>;

    /// A single event by id.
    fn event(&self, id: EventId) -> Option<Event>;

    /// All ticket records.
    fn tickets(&self) -> Vec<Ticket>;

    /// Tickets admitting to one event.
    fn tickets_for_event(&self, event_id: EventId) -> Vec<Ticket>;

    /// Tickets owned by one user.
    fn tickets_for_user(&self, user_id: UserId) -> Vec<Ticket>;

    /// Events created by one user.
    fn events_created_by(&self, creator_id: UserId) -> Vec<Event>;

    /// Ids of the events a user has favorited.
    fn favorite_event_ids(&self, user_id: UserId) -> HashSet<EventId>;

    /// Whether a user has favorited an event.
    fn is_favorite(&self, user_id: UserId, event_id: EventId) -> bool;

    /// Tickets-sold count per event, for every event with at least one
    /// ticket.
    fn attendee_counts(&self) -> HashMap<EventId, u32>;

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Validate and persist a new event.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Domain`] when the payload fails validation.
    fn create_event(&mut self, new_event: NewEvent, now: DateTime<Utc>)
        -> Result<Event, StorageError>;

    /// Mark an event as a favorite of `user_id`.
    ///
    /// Idempotent: favoriting an already-favorited event returns the
    /// existing row unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::EventNotFound`] when the event does not
    /// exist.
    fn add_favorite(
        &mut self,
        user_id: UserId,
        event_id: EventId,
        now: DateTime<Utc>,
    ) -> Result<Favorite, StorageError>;

    /// Remove a favorite. Removing one that does not exist is a no-op;
    /// returns whether a row was removed.
    fn remove_favorite(&mut self, user_id: UserId, event_id: EventId) -> bool;

    /// Purchase `quantity` tickets of one tier for an event.
    ///
    /// Each ticket is priced by the tier: Basic at the event's minimum,
    /// Standard at the midpoint, VIP at the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidQuantity`] when `quantity` is zero and
    /// [`StorageError::EventNotFound`] when the event does not exist.
    fn purchase_tickets(
        &mut self,
        user_id: UserId,
        event_id: EventId,
        ticket_type: TicketType,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Ticket>, StorageError>;
}
