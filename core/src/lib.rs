//! Domain types for the Evently event discovery and ticketing platform.
//!
//! This crate owns the canonical record shapes (events, tickets, favorites),
//! the value objects they are built from (identifiers, money, categories,
//! ticket tiers), and the derived views assembled at the boundary of the
//! query and analytics engines.
//!
//! # Design
//!
//! Canonical records are immutable snapshots: the engines in
//! `evently-query` and `evently-analytics` only ever read them. Anything a
//! caller sees that is *derived* (per-user favorite state, attendee counts,
//! display price ranges) lives on [`EventView`] and is recomputed on every
//! request by [`assemble_views`], never stored on the record itself. This
//! keeps the canonical [`Event`] free of invariant drift between the record
//! and its presentation.
//!
//! Record invariants (`price_min <= price_max`, `capacity > 0`) are enforced
//! once, at creation time, through [`NewEvent::validate`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod view;

pub use error::DomainError;
pub use types::{
    Category, Event, EventId, Favorite, FavoriteId, Money, NewEvent, Ticket, TicketId, TicketType,
    UserId,
};
pub use view::{assemble_views, EventView};
