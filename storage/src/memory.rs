//! In-memory repository backed by hash maps.

use chrono::{DateTime, Utc};
use evently_core::{
    Event, EventId, Favorite, FavoriteId, NewEvent, Ticket, TicketId, TicketType, UserId,
};
use std::collections::{HashMap, HashSet};

use crate::error::StorageError;
use crate::repository::Repository;

/// Hash-map-backed [`Repository`].
///
/// Suitable for tests and single-process deployments. Iteration order is
/// unspecified; callers that need ordering sort the returned snapshots.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    events: HashMap<EventId, Event>,
    tickets: HashMap<TicketId, Ticket>,
    favorites: HashMap<FavoriteId, Favorite>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with pre-built records, bypassing validation.
    ///
    /// Intended for tests and fixtures that need full control over ids and
    /// timestamps.
    #[must_use]
    pub fn with_records(events: Vec<Event>, tickets: Vec<Ticket>) -> Self {
        Self {
            events: events.into_iter().map(|e| (e.id, e)).collect(),
            tickets: tickets.into_iter().map(|t| (t.id, t)).collect(),
            favorites: HashMap::new(),
        }
    }

    fn favorite_row(&self, user_id: UserId, event_id: EventId) -> Option<&Favorite> {
        self.favorites
            .values()
            .find(|f| f.user_id == user_id && f.event_id == event_id)
    }
}

impl Repository for InMemoryRepository {
    fn events(&self) -> Vec<Event> {
        self.events.values().cloned().collect()
    }

    fn event(&self, id: EventId) -> Option<Event> {
        self.events.get(&id).cloned()
    }

    fn tickets(&self) -> Vec<Ticket> {
        self.tickets.values().cloned().collect()
    }

    fn tickets_for_event(&self, event_id: EventId) -> Vec<Ticket> {
        self.tickets
            .values()
            .filter(|t| t.event_id == event_id)
            .cloned()
            .collect()
    }

    fn tickets_for_user(&self, user_id: UserId) -> Vec<Ticket> {
        self.tickets
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    fn events_created_by(&self, creator_id: UserId) -> Vec<Event> {
        self.events
            .values()
            .filter(|e| e.creator_id == creator_id)
            .cloned()
            .collect()
    }

    fn favorite_event_ids(&self, user_id: UserId) -> HashSet<EventId> {
        self.favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.event_id)
            .collect()
    }

    fn is_favorite(&self, user_id: UserId, event_id: EventId) -> bool {
        self.favorite_row(user_id, event_id).is_some()
    }

    fn attendee_counts(&self) -> HashMap<EventId, u32> {
        let mut counts: HashMap<EventId, u32> = HashMap::new();
        for ticket in self.tickets.values() {
            *counts.entry(ticket.event_id).or_insert(0) += 1;
        }
        counts
    }

    fn create_event(
        &mut self,
        new_event: NewEvent,
        now: DateTime<Utc>,
    ) -> Result<Event, StorageError> {
        new_event.validate()?;
        let event = new_event.into_event(EventId::new(), now);
        tracing::debug!(event_id = %event.id, name = %event.name, "created event");
        self.events.insert(event.id, event.clone());
        Ok(event)
    }

    fn add_favorite(
        &mut self,
        user_id: UserId,
        event_id: EventId,
        now: DateTime<Utc>,
    ) -> Result<Favorite, StorageError> {
        if !self.events.contains_key(&event_id) {
            return Err(StorageError::EventNotFound(event_id));
        }
        if let Some(existing) = self.favorite_row(user_id, event_id) {
            return Ok(existing.clone());
        }
        let favorite = Favorite {
            id: FavoriteId::new(),
            user_id,
            event_id,
            created_at: now,
        };
        self.favorites.insert(favorite.id, favorite.clone());
        Ok(favorite)
    }

    fn remove_favorite(&mut self, user_id: UserId, event_id: EventId) -> bool {
        let id = self.favorite_row(user_id, event_id).map(|f| f.id);
        match id {
            Some(id) => self.favorites.remove(&id).is_some(),
            None => false,
        }
    }

    fn purchase_tickets(
        &mut self,
        user_id: UserId,
        event_id: EventId,
        ticket_type: TicketType,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Ticket>, StorageError> {
        if quantity == 0 {
            return Err(StorageError::InvalidQuantity);
        }
        let event = self
            .events
            .get(&event_id)
            .ok_or(StorageError::EventNotFound(event_id))?;
        let price = ticket_type.price_for(event);

        let purchased: Vec<Ticket> = (0..quantity)
            .map(|_| Ticket {
                id: TicketId::new(),
                event_id,
                user_id,
                ticket_type,
                price,
                purchased_at: now,
                is_used: false,
            })
            .collect();
        tracing::debug!(
            event_id = %event_id,
            %ticket_type,
            quantity,
            %price,
            "purchased tickets"
        );
        for ticket in &purchased {
            self.tickets.insert(ticket.id, ticket.clone());
        }
        Ok(purchased)
    }
}
