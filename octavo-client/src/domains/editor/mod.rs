//! Book edit view domain
//!
//! Composes the detail load machinery with a mutable draft and a save
//! sub-machine. The draft is hydrated once per successful load; saving is
//! serialized and surfaces a navigation effect on success.

pub mod draft;
pub mod messages;
pub mod state;
pub mod update;

pub use draft::{BookDraft, Field};
pub use messages::Message;
pub use state::SaveState;
pub use update::update_editor;

use std::sync::Arc;

use crate::domains::details::BookDetails;
use crate::infra::services::BookService;

/// User-facing text for a failed save with no remote detail to surface.
pub const SAVE_FAILED: &str = "Failed to save changes.";

/// Edit view controller state.
pub struct BookEditor {
    pub(crate) details: BookDetails,
    pub(crate) draft: Option<BookDraft>,
    pub(crate) save_state: SaveState,
    pub(crate) generation: u64,
}

impl BookEditor {
    pub fn new(service: Arc<dyn BookService>) -> Self {
        Self {
            details: BookDetails::new(service),
            draft: None,
            save_state: SaveState::Idle,
            generation: 0,
        }
    }

    /// The embedded load machinery; exposes the load-phase view state.
    pub fn details(&self) -> &BookDetails {
        &self.details
    }

    /// The working draft, present only after a successful load.
    pub fn draft(&self) -> Option<&BookDraft> {
        self.draft.as_ref()
    }

    pub fn save_state(&self) -> &SaveState {
        &self.save_state
    }

    /// True when the draft differs from its last-synced snapshot.
    pub fn is_dirty(&self) -> bool {
        self.draft.as_ref().is_some_and(BookDraft::is_dirty)
    }

    /// True when a draft exists and validates.
    pub fn is_valid(&self) -> bool {
        self.draft.as_ref().is_some_and(BookDraft::is_valid)
    }

    /// True when a submit right now would actually start a save.
    pub fn can_save(&self) -> bool {
        self.is_valid()
            && self.details.view_state().is_loaded()
            && !self.save_state.is_saving()
    }
}

impl std::fmt::Debug for BookEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookEditor")
            .field("details", &self.details)
            .field("draft", &self.draft)
            .field("save_state", &self.save_state)
            .field("generation", &self.generation)
            .finish()
    }
}
