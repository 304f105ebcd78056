//! Canonical record shapes and value objects.
//!
//! Identifiers are newtypes over [`Uuid`]; money is integer cents. The
//! [`Category`] enum owns the single filter-code mapping table used by both
//! the query engine and any presentation layer, so the mapping is never
//! re-derived ad hoc.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random `EventId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an `EventId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a ticket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Creates a new random `TicketId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a `TicketId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random `UserId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a `UserId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a favorite row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteId(Uuid);

impl FavoriteId {
    /// Creates a new random `FavoriteId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FavoriteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (cents-based to avoid floating point errors)
// ============================================================================

/// Represents money in cents to avoid floating-point arithmetic errors
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a `Money` value from dollars
    ///
    /// # Panics
    ///
    /// Panics if the conversion would overflow (dollars * 100 > `u64::MAX`).
    /// Use `checked_from_dollars` for non-panicking conversion.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn from_dollars(dollars: u64) -> Self {
        match dollars.checked_mul(100) {
            Some(cents) => Self(cents),
            None => panic!("Money::from_dollars overflow"),
        }
    }

    /// Creates a `Money` value from dollars with overflow checking
    #[must_use]
    pub const fn checked_from_dollars(dollars: u64) -> Option<Self> {
        match dollars.checked_mul(100) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount in dollars (rounded down)
    #[must_use]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Adds two money amounts, saturating at `u64::MAX`
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Midpoint between two amounts (rounded down to the cent)
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self(self.0 / 2 + other.0 / 2 + (self.0 % 2 + other.0 % 2) / 2)
    }

    /// Sums an iterator of amounts, saturating on overflow
    pub fn sum<I: IntoIterator<Item = Self>>(amounts: I) -> Self {
        amounts
            .into_iter()
            .fold(Self::ZERO, Self::saturating_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.0 % 100)
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Event category.
///
/// The closed set of categories an event may carry. This enum is the single
/// owner of the short filter-code mapping (`music`, `tech`, ...) used by the
/// query engine, and of the canonical display labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Concerts and festivals
    #[serde(rename = "Music")]
    Music,
    /// Conferences and meetups
    #[serde(rename = "Technology")]
    Technology,
    /// Exhibitions and performances
    #[serde(rename = "Art & Culture")]
    ArtCulture,
    /// Games and tournaments
    #[serde(rename = "Sports")]
    Sports,
    /// Tastings and festivals
    #[serde(rename = "Food & Drink")]
    FoodDrink,
    /// Summits and networking
    #[serde(rename = "Business")]
    Business,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Self; 6] = [
        Self::Music,
        Self::Technology,
        Self::ArtCulture,
        Self::Sports,
        Self::FoodDrink,
        Self::Business,
    ];

    /// Canonical display label (e.g. `"Art & Culture"`)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Music => "Music",
            Self::Technology => "Technology",
            Self::ArtCulture => "Art & Culture",
            Self::Sports => "Sports",
            Self::FoodDrink => "Food & Drink",
            Self::Business => "Business",
        }
    }

    /// Short filter code used in query strings (e.g. `"art"`)
    #[must_use]
    pub const fn filter_code(&self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Technology => "tech",
            Self::ArtCulture => "art",
            Self::Sports => "sports",
            Self::FoodDrink => "food",
            Self::Business => "business",
        }
    }

    /// Resolve a short filter code to a category.
    ///
    /// Returns `None` for unknown codes; callers treat that as "no
    /// constraint" (permissive-by-default filter policy).
    #[must_use]
    pub fn from_filter_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.filter_code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Ticket Tiers
// ============================================================================

/// Ticket pricing tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    /// Entry-level admission, priced at the event's minimum
    #[serde(rename = "Basic")]
    Basic,
    /// Mid-tier admission, priced at the min/max midpoint
    #[serde(rename = "Standard")]
    Standard,
    /// Premium admission, priced at the event's maximum
    #[serde(rename = "VIP")]
    Vip,
}

impl TicketType {
    /// Price of this tier for a given event.
    #[must_use]
    pub const fn price_for(&self, event: &Event) -> Money {
        match self {
            Self::Basic => event.price_min,
            Self::Standard => event.price_min.midpoint(event.price_max),
            Self::Vip => event.price_max,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Basic => "Basic",
            Self::Standard => "Standard",
            Self::Vip => "VIP",
        };
        write!(f, "{label}")
    }
}

// ============================================================================
// Domain Entities
// ============================================================================

/// Canonical event record.
///
/// Carries no derived state: per-user favorite flags, attendee counts and
/// display price ranges belong to [`crate::view::EventView`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier
    pub id: EventId,
    /// Event name (e.g. "Summer Music Festival")
    pub name: String,
    /// Free-text description
    pub description: String,
    /// When the event takes place
    pub date: DateTime<Utc>,
    /// Venue / city free text (e.g. "Central Park, New York")
    pub location: String,
    /// Event category
    pub category: Category,
    /// Cheapest admission price
    pub price_min: Money,
    /// Most expensive admission price
    pub price_max: Money,
    /// Venue capacity (always > 0 for records created through `NewEvent`)
    pub capacity: u32,
    /// User who created the event
    pub creator_id: UserId,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Whether the event is in the future relative to `now`.
    #[must_use]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date >= now
    }

    /// Display string for the price range (e.g. `"$25 - $100"`).
    #[must_use]
    pub fn price_range_label(&self) -> String {
        format!("${} - ${}", self.price_min.dollars(), self.price_max.dollars())
    }
}

/// Ticket record for a purchased admission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket identifier
    pub id: TicketId,
    /// Event this ticket admits to
    pub event_id: EventId,
    /// Owning user
    pub user_id: UserId,
    /// Pricing tier
    pub ticket_type: TicketType,
    /// Price paid
    pub price: Money,
    /// When the ticket was purchased
    pub purchased_at: DateTime<Utc>,
    /// Whether the ticket has been redeemed at the venue
    pub is_used: bool,
}

/// A user's favorite marker on an event.
///
/// At most one row exists per `(user, event)` pair; the storage layer
/// enforces the uniqueness with a direct existence lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    /// Unique row identifier
    pub id: FavoriteId,
    /// User who favorited
    pub user_id: UserId,
    /// Favorited event
    pub event_id: EventId,
    /// When the favorite was added
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new event.
///
/// Carries the Event invariants: validation happens here, once, so every
/// [`Event`] built through [`NewEvent::into_event`] is well-formed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Event name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// When the event takes place
    pub date: DateTime<Utc>,
    /// Venue / city free text
    pub location: String,
    /// Event category
    pub category: Category,
    /// Cheapest admission price
    pub price_min: Money,
    /// Most expensive admission price
    pub price_max: Money,
    /// Venue capacity
    pub capacity: u32,
    /// User creating the event
    pub creator_id: UserId,
}

impl NewEvent {
    /// Check the Event invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PriceRangeInverted`] when
    /// `price_min > price_max`, and [`DomainError::ZeroCapacity`] when the
    /// capacity is zero.
    pub const fn validate(&self) -> Result<(), DomainError> {
        if self.price_min.cents() > self.price_max.cents() {
            return Err(DomainError::PriceRangeInverted {
                price_min: self.price_min,
                price_max: self.price_max,
            });
        }
        if self.capacity == 0 {
            return Err(DomainError::ZeroCapacity);
        }
        Ok(())
    }

    /// Build the canonical record once validation has passed.
    #[must_use]
    pub fn into_event(self, id: EventId, now: DateTime<Utc>) -> Event {
        Event {
            id,
            name: self.name,
            description: self.description,
            date: self.date,
            location: self.location,
            category: self.category,
            price_min: self.price_min,
            price_max: self.price_max,
            capacity: self.capacity,
            creator_id: self.creator_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_event() -> NewEvent {
        NewEvent {
            name: "Summer Music Festival".to_string(),
            description: "Three days of live music".to_string(),
            date: Utc::now() + Duration::days(30),
            location: "Central Park, New York".to_string(),
            category: Category::Music,
            price_min: Money::from_dollars(25),
            price_max: Money::from_dollars(100),
            capacity: 500,
            creator_id: UserId::new(),
        }
    }

    #[test]
    fn test_valid_event_passes_validation() {
        assert!(new_event().validate().is_ok());
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let mut event = new_event();
        event.price_min = Money::from_dollars(200);
        assert!(matches!(
            event.validate(),
            Err(DomainError::PriceRangeInverted { .. })
        ));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut event = new_event();
        event.capacity = 0;
        assert!(matches!(event.validate(), Err(DomainError::ZeroCapacity)));
    }

    #[test]
    fn test_price_range_label() {
        let event = new_event().into_event(EventId::new(), Utc::now());
        assert_eq!(event.price_range_label(), "$25 - $100");
    }

    #[test]
    fn test_tier_pricing() {
        let event = new_event().into_event(EventId::new(), Utc::now());
        assert_eq!(TicketType::Basic.price_for(&event), Money::from_dollars(25));
        assert_eq!(
            TicketType::Standard.price_for(&event),
            Money::from_cents(6250)
        );
        assert_eq!(TicketType::Vip.price_for(&event), Money::from_dollars(100));
    }

    #[test]
    fn test_category_filter_codes_round_trip() {
        for category in Category::ALL {
            assert_eq!(
                Category::from_filter_code(category.filter_code()),
                Some(category)
            );
        }
        assert_eq!(Category::from_filter_code("karaoke"), None);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::ArtCulture).unwrap();
        assert_eq!(json, "\"Art & Culture\"");
    }

    #[test]
    fn test_money_midpoint_rounds_down() {
        let mid = Money::from_cents(2500).midpoint(Money::from_cents(10001));
        assert_eq!(mid.cents(), 6250);
    }

    #[test]
    fn test_money_sum_saturates() {
        let total = Money::sum([Money::from_cents(u64::MAX), Money::from_cents(1)]);
        assert_eq!(total.cents(), u64::MAX);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(12345).to_string(), "$123.45");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn midpoint_lies_between_its_operands(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
                let (lo, hi) = (a.min(b), a.max(b));
                let mid = Money::from_cents(a).midpoint(Money::from_cents(b)).cents();
                prop_assert!(mid >= lo && mid <= hi);
            }

            #[test]
            fn midpoint_never_overflows_where_naive_average_would(
                a in u64::MAX / 2..u64::MAX,
                b in u64::MAX / 2..u64::MAX,
            ) {
                let mid = Money::from_cents(a).midpoint(Money::from_cents(b)).cents();
                prop_assert!(mid >= a.min(b));
            }

            #[test]
            fn sum_matches_checked_addition_when_no_overflow(
                cents in prop::collection::vec(0u64..1_000_000, 0..50)
            ) {
                let expected: u64 = cents.iter().sum();
                let total = Money::sum(cents.into_iter().map(Money::from_cents));
                prop_assert_eq!(total.cents(), expected);
            }
        }
    }
}
