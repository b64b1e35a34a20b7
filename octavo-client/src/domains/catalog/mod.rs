//! Book browse (list) domain
//!
//! Idempotent list loading with a search query. A changed query supersedes
//! any request still in flight; retry after failure is a user action.

pub mod messages;
pub mod state;
pub mod update;

pub use messages::Message;
pub use state::CatalogState;
pub use update::update_catalog;

use std::sync::Arc;

use crate::infra::api_types::BookQuery;
use crate::infra::services::BookService;

/// Page size used when the host does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// User-facing text for a failed list load.
pub const LIST_FAILED: &str = "Failed to load books.";

/// Browse view controller state.
pub struct BookCatalog {
    pub(crate) service: Arc<dyn BookService>,
    pub(crate) query: BookQuery,
    pub(crate) load_state: CatalogState,
    pub(crate) generation: u64,
}

impl BookCatalog {
    pub fn new(service: Arc<dyn BookService>) -> Self {
        Self {
            service,
            query: BookQuery {
                limit: Some(DEFAULT_PAGE_SIZE),
                q: None,
            },
            load_state: CatalogState::NotStarted,
            generation: 0,
        }
    }

    pub fn load_state(&self) -> &CatalogState {
        &self.load_state
    }

    /// The query the next (or current) load uses.
    pub fn query(&self) -> &BookQuery {
        &self.query
    }
}

impl std::fmt::Debug for BookCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookCatalog")
            .field("query", &self.query)
            .field("load_state", &self.load_state)
            .field("generation", &self.generation)
            .finish()
    }
}
