//! Error types for the analytics engine.

use thiserror::Error;

/// Malformed-argument errors.
///
/// Empty snapshots and zero denominators are valid inputs with defined
/// results; these only cover arguments that can never be valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// The monthly revenue lookback must span at least one day
    #[error("lookback must be at least 1 day (got {days})")]
    InvalidLookback {
        /// The offending lookback
        days: u32,
    },
}
