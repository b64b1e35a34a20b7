//! Edit view save-state machine.

/// Save lifecycle, orthogonal to the load lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveState {
    /// No save in flight; submission permitted for a valid, loaded draft.
    Idle,
    /// A save round-trip is outstanding; further submissions are ignored.
    Saving,
    /// The last save failed; the draft is retained and submission re-enabled.
    SaveError { message: String },
}

impl Default for SaveState {
    fn default() -> Self {
        SaveState::Idle
    }
}

impl SaveState {
    pub fn is_saving(&self) -> bool {
        matches!(self, SaveState::Saving)
    }

    /// Text for the save error banner, if the last save failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SaveState::SaveError { message } => Some(message),
            _ => None,
        }
    }
}
