//! Per-view controllers.

pub mod catalog;
pub mod details;
pub mod editor;
