//! Detail view state machine.

use octavo_model::Book;

/// Load lifecycle for a single catalog entry.
///
/// Only `Loading` moves to a terminal state; terminal states never transition
/// into each other without a fresh initialize.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Fetch in flight (or about to be issued).
    Loading,
    /// Entity retrieved.
    Loaded(Book),
    /// The resource reports no entity under the requested id.
    NotFound,
    /// The fetch failed, or no id was supplied.
    Error { message: String },
}

impl ViewState {
    /// Entity access for `Loaded`, `None` otherwise.
    pub fn book(&self) -> Option<&Book> {
        match self {
            ViewState::Loaded(book) => Some(book),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }

    /// Text for the error banner, if the load failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error { message } => Some(message),
            _ => None,
        }
    }
}
