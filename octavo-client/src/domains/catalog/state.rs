//! Catalog view load-state machine.

use octavo_model::Book;

/// Load state of the browse list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// No load has been requested yet.
    #[default]
    NotStarted,
    /// A list request is in flight.
    Loading,
    /// The last load succeeded.
    Loaded { books: Vec<Book> },
    /// The last load failed.
    Failed { message: String },
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn books(&self) -> Option<&[Book]> {
        match self {
            CatalogState::Loaded { books } => Some(books),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            CatalogState::Failed { message } => Some(message),
            _ => None,
        }
    }
}
