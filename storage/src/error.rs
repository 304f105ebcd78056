//! Error types for the storage layer.

use evently_core::{DomainError, EventId};
use thiserror::Error;

/// Errors returned by repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The referenced event does not exist
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    /// Ticket purchases must be for at least one ticket
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// A record failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}
