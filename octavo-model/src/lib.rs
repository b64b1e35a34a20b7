//! Core data model definitions shared across Octavo crates.
#![allow(missing_docs)]

pub mod book;
pub mod error;
pub mod ids;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use book::Book;
pub use error::{ModelError, Result as ModelResult};
pub use ids::BookId;
