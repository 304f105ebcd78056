//! Analytics aggregation engine: metrics, time series, breakdowns, rankings.
//!
//! [`AnalyticsAggregator`] computes four independent read-only views over a
//! caller-supplied snapshot of events and tickets:
//!
//! - a [`AnalyticsMetrics`] snapshot with period-over-period growth,
//! - a dense monthly revenue series ([`MonthlyStat`]),
//! - per-category ticket/revenue breakdowns ([`EventCategoryStat`]),
//! - fill-rate performance for the nearest upcoming events
//!   ([`EventPerformance`]).
//!
//! All four are pure functions of the snapshot and an explicit `now`; the
//! aggregator holds no state and performs no I/O. Derived views are
//! recomputed on every call, never cached.
//!
//! # Failure semantics
//!
//! Zero denominators never fault: growth against an empty previous window is
//! defined as 0, and a zero-capacity event classifies as
//! [`PerformanceStatus::AtRisk`] with a fill rate of 0. Tickets whose event
//! no longer resolves are skipped in per-event aggregates. The only errors
//! are malformed arguments, e.g. a zero-day lookback.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregator;
pub mod categories;
pub mod error;
pub mod metrics;
pub mod monthly;
pub mod performance;

pub use aggregator::AnalyticsAggregator;
pub use categories::{CategoryView, EventCategoryStat};
pub use error::AnalyticsError;
pub use metrics::{AnalyticsMetrics, GROWTH_WINDOW_DAYS};
pub use monthly::MonthlyStat;
pub use performance::{EventPerformance, PerformanceStatus, TOP_UPCOMING_LIMIT};
