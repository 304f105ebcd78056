//! Storage abstraction for the Evently platform.
//!
//! [`Repository`] is the persistence seam: reads hand back owned snapshots
//! that the query and analytics engines consume, writes validate through the
//! domain types in `evently-core`. [`InMemoryRepository`] is the hash-map
//! implementation used by tests and single-process deployments.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod memory;
pub mod repository;

pub use error::StorageError;
pub use memory::InMemoryRepository;
pub use repository::Repository;
