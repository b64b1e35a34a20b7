//! Outward-facing signals surfaced alongside controller updates.

/// One-shot requests aimed at collaborators outside the controllers.
///
/// Controllers never act on the outside world directly; the host shell drains
/// these from each [`Update`](crate::common::Update) and decides how to honor
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the routing collaborator to navigate to `path`.
    RequestNavigate { path: String },
}
