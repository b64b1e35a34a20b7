//! Catalog view messages.

use octavo_model::Book;

use crate::infra::services::ServiceError;

/// Messages handled by the browse controller.
#[derive(Debug, Clone)]
pub enum Message {
    /// Load the list with the current query. A no-op while a load with the
    /// same query is already in flight.
    Load,
    /// The search box changed. Whitespace-only input clears the filter.
    SearchChanged(String),
    /// The page size changed.
    LimitChanged(u32),
    /// A list request completed.
    BooksFetched {
        generation: u64,
        result: Result<Vec<Book>, ServiceError>,
    },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Message::Load => "Catalog::Load",
            Message::SearchChanged(_) => "Catalog::SearchChanged",
            Message::LimitChanged(_) => "Catalog::LimitChanged",
            Message::BooksFetched { .. } => "Catalog::BooksFetched",
        }
    }
}
