//! Client-focused snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in octavo-client or other consumer layers.

pub use super::book::Book;
pub use super::error::{ModelError, Result as ModelResult};
pub use super::ids::BookId;
