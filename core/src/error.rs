//! Error types for domain invariant violations.

use crate::types::Money;
use thiserror::Error;

/// Violations of the canonical record invariants.
///
/// These are malformed-input errors: they identify the offending parameter
/// and are surfaced unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// `price_min` exceeds `price_max`
    #[error("price_min ({price_min}) exceeds price_max ({price_max})")]
    PriceRangeInverted {
        /// The offending minimum price
        price_min: Money,
        /// The offending maximum price
        price_max: Money,
    },

    /// Event capacity must be greater than zero
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
}
