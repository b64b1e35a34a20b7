//! Shared plumbing used by every domain controller.

pub mod effects;
pub mod messages;

pub use effects::Effect;
pub use messages::{Command, Update};
