//! API route constants for the Octavo client.
//!
//! All paths are relative to the configured server base URL.

/// Book catalog endpoints
pub mod books {
    /// Books collection
    pub const COLLECTION: &str = "/books";

    /// Path to a single book keyed by id
    pub fn by_id(id: &str) -> String {
        format!("{COLLECTION}/{id}")
    }
}
