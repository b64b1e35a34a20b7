//! Test scaffolding shared by unit and integration tests.
//!
//! Compiled into the library (not `cfg(test)`) so integration tests and host
//! shells running against canned data can reuse the same stubs.

pub mod fixtures;
pub mod stubs;
