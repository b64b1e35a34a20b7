//! Book detail view domain
//!
//! Owns the load lifecycle for a single catalog entry. A fetch is issued on
//! initialize and resolves into exactly one terminal view state; a fresh
//! initialize supersedes anything still in flight.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::Message;
pub use state::ViewState;
pub use update::update_details;

use std::sync::Arc;

use octavo_model::BookId;

use crate::infra::services::BookService;

/// User-facing text for a load that failed for any reason other than a
/// missing entity.
pub const LOAD_FAILED: &str = "Failed to load book.";

/// User-facing text when the route carried no id.
pub const MISSING_ID: &str = "Missing book id in the route.";

/// Detail view controller state.
pub struct BookDetails {
    pub(crate) service: Arc<dyn BookService>,
    pub(crate) book_id: Option<BookId>,
    pub(crate) view_state: ViewState,
    pub(crate) generation: u64,
}

impl BookDetails {
    pub fn new(service: Arc<dyn BookService>) -> Self {
        Self {
            service,
            book_id: None,
            view_state: ViewState::Loading,
            generation: 0,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// The id this view is bound to, once initialized with one.
    pub fn book_id(&self) -> Option<&BookId> {
        self.book_id.as_ref()
    }

    /// True when `generation` is the current activation; completions from
    /// older activations are discarded.
    pub fn is_generation(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

impl std::fmt::Debug for BookDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookDetails")
            .field("book_id", &self.book_id)
            .field("view_state", &self.view_state)
            .field("generation", &self.generation)
            .finish()
    }
}
