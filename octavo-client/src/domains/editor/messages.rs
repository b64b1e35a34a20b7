//! Edit view messages.

use octavo_model::{Book, BookId};

use crate::domains::details;
use crate::infra::services::ServiceError;

use super::draft::Field;

/// Messages driving the edit view.
#[derive(Debug, Clone)]
pub enum Message {
    /// Load-phase messages delegated to the embedded detail machinery.
    Details(details::Message),
    /// A form field changed.
    FieldChanged { field: Field, value: String },
    /// Submit requested.
    SaveRequested,
    /// The save round-trip completed.
    SaveCompleted {
        generation: u64,
        result: Result<Book, ServiceError>,
    },
}

impl Message {
    /// Activate the editor for the routed id.
    pub fn initialize(book_id: Option<BookId>) -> Self {
        Message::Details(details::Message::Initialize(book_id))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Details(inner) => inner.name(),
            Self::FieldChanged { .. } => "Editor::FieldChanged",
            Self::SaveRequested => "Editor::SaveRequested",
            Self::SaveCompleted { .. } => "Editor::SaveCompleted",
        }
    }
}
