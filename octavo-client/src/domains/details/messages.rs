//! Detail view messages.

use octavo_model::{Book, BookId};

use crate::infra::services::ServiceError;

/// Messages driving the detail view lifecycle.
#[derive(Debug, Clone)]
pub enum Message {
    /// Activate the view for the routed id (`None` when the route carried no
    /// id).
    Initialize(Option<BookId>),
    /// A fetch issued by [`Initialize`](Message::Initialize) completed.
    BookFetched {
        generation: u64,
        result: Result<Book, ServiceError>,
    },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize(_) => "Details::Initialize",
            Self::BookFetched { .. } => "Details::BookFetched",
        }
    }
}
