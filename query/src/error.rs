//! Error types for the query engine.

use thiserror::Error;

/// Malformed-argument errors.
///
/// Zero-match queries are not errors; these only cover arguments that can
/// never be valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Pages are 1-based; zero is never valid
    #[error("page must be at least 1 (got {page})")]
    InvalidPage {
        /// The offending page number
        page: u32,
    },

    /// A page size of zero makes pagination undefined
    #[error("page size must be at least 1")]
    InvalidPageSize,
}
