//! Fixture builders for the Evently test suites.
//!
//! Snapshot-based tests need many event and ticket records that differ in
//! one or two fields. The builders here start from sensible defaults and
//! let each test override only what it asserts on.
//!
//! Builders construct records directly (bypassing `NewEvent` validation) so
//! edge-case tests can produce deliberately malformed snapshots, e.g. a
//! zero-capacity event for fill-rate classification.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use evently_core::{
    Category, Event, EventId, Money, Ticket, TicketId, TicketType, UserId,
};

/// Builder for [`Event`] fixtures.
#[derive(Clone, Debug)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    /// Starts from a week-out music event with a $25-$100 price range and
    /// capacity 300.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            event: Event {
                id: EventId::new(),
                name: "Sample Event".to_string(),
                description: "Description for Sample Event".to_string(),
                date: now + Duration::days(7),
                location: "Central Park, New York".to_string(),
                category: Category::Music,
                price_min: Money::from_dollars(25),
                price_max: Money::from_dollars(100),
                capacity: 300,
                creator_id: UserId::new(),
                created_at: now,
                updated_at: now,
            },
        }
    }

    /// Sets the event id.
    #[must_use]
    pub fn id(mut self, id: EventId) -> Self {
        self.event.id = id;
        self
    }

    /// Sets the event name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.event.name = name.to_string();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.event.description = description.to_string();
        self
    }

    /// Sets the event date.
    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.event.date = date;
        self
    }

    /// Sets the event date relative to now (negative values are past).
    #[must_use]
    pub fn days_out(mut self, days: i64) -> Self {
        self.event.date = Utc::now() + Duration::days(days);
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn location(mut self, location: &str) -> Self {
        self.event.location = location.to_string();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.event.category = category;
        self
    }

    /// Sets both ends of the price range.
    #[must_use]
    pub fn prices(mut self, price_min: Money, price_max: Money) -> Self {
        self.event.price_min = price_min;
        self.event.price_max = price_max;
        self
    }

    /// Sets the capacity.
    #[must_use]
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.event.capacity = capacity;
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.event.created_at = created_at;
        self
    }

    /// Sets the creator.
    #[must_use]
    pub fn creator(mut self, creator_id: UserId) -> Self {
        self.event.creator_id = creator_id;
        self
    }

    /// Finishes the fixture.
    #[must_use]
    pub fn build(self) -> Event {
        self.event
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Ticket`] fixtures.
#[derive(Clone, Debug)]
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Starts from a just-purchased $50 Standard ticket for `event_id`.
    #[must_use]
    pub fn for_event(event_id: EventId) -> Self {
        Self {
            ticket: Ticket {
                id: TicketId::new(),
                event_id,
                user_id: UserId::new(),
                ticket_type: TicketType::Standard,
                price: Money::from_dollars(50),
                purchased_at: Utc::now(),
                is_used: false,
            },
        }
    }

    /// Sets the owner.
    #[must_use]
    pub fn owner(mut self, user_id: UserId) -> Self {
        self.ticket.user_id = user_id;
        self
    }

    /// Sets the pricing tier.
    #[must_use]
    pub fn ticket_type(mut self, ticket_type: TicketType) -> Self {
        self.ticket.ticket_type = ticket_type;
        self
    }

    /// Sets the price paid.
    #[must_use]
    pub fn price(mut self, price: Money) -> Self {
        self.ticket.price = price;
        self
    }

    /// Sets the purchase timestamp.
    #[must_use]
    pub fn purchased_at(mut self, purchased_at: DateTime<Utc>) -> Self {
        self.ticket.purchased_at = purchased_at;
        self
    }

    /// Sets the purchase timestamp relative to now (negative values are
    /// past).
    #[must_use]
    pub fn purchased_days_ago(mut self, days: i64) -> Self {
        self.ticket.purchased_at = Utc::now() - Duration::days(days);
        self
    }

    /// Marks the ticket as redeemed.
    #[must_use]
    pub fn used(mut self) -> Self {
        self.ticket.is_used = true;
        self
    }

    /// Finishes the fixture.
    #[must_use]
    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Builds `count` tickets for one event in a single call.
#[must_use]
pub fn tickets_for(event_id: EventId, count: usize) -> Vec<Ticket> {
    (0..count)
        .map(|_| TicketBuilder::for_event(event_id).build())
        .collect()
}
