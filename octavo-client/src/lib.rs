//! Octavo client library
//!
//! Headless view-state synchronization for a remote book catalog. Modules
//! here cover the resource gateway, the per-view controllers, and the command
//! and effect plumbing that connects them to a host shell.
//!
//! Notes
//! - Controllers are plain state machines; every async step is returned to
//!   the caller as a [`common::Command`] and fed back as a message, so hosts
//!   keep full control over scheduling and supersession stays testable.
//! - Public items are subject to change while the controller surfaces settle.

pub mod common;
pub mod domains;
pub mod infra;
