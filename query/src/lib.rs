//! Event query engine: multi-criteria filtering, ordering, and pagination.
//!
//! [`EventQueryEngine`] is a pure function over a caller-supplied snapshot of
//! events: it holds no state beyond a page size, performs no I/O, and takes
//! `now` as an explicit argument so date-bucket filters are reproducible in
//! tests. The surrounding API layer reads the event collection from its
//! storage collaborator and hands it in as a slice.
//!
//! # Semantics
//!
//! - All filters are conjunctive (AND); an absent or `all` value means no
//!   constraint, and unrecognized filter codes fall back to no constraint
//!   (permissive by default; strict validation belongs to the caller).
//! - Results are ordered ascending by event date (soonest first). No other
//!   sort order is exposed.
//! - Pagination is 1-based with a default page size of 9; out-of-range pages
//!   return an empty slice, never an error. A zero-match query is a valid
//!   outcome with `total_pages == 0`.
//!
//! ```
//! use chrono::Utc;
//! use evently_query::{EventFilter, EventQueryEngine};
//!
//! let engine = EventQueryEngine::new();
//! let filter = EventFilter {
//!     search: Some("music".to_string()),
//!     ..EventFilter::default()
//! };
//! let page = engine.query(&[], &filter, 1, Utc::now()).unwrap();
//! assert_eq!(page.pagination.total_items, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dates;
pub mod engine;
pub mod error;
pub mod filter;

pub use engine::{EventPage, EventQueryEngine, Pagination, DEFAULT_PAGE_SIZE};
pub use error::QueryError;
pub use filter::{DateRange, EventFilter, PriceBand};
