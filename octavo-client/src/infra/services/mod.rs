//! Service abstractions over the remote catalog.

use thiserror::Error;

pub mod books;

pub use books::BookService;

/// Result type for gateway operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Gateway-specific errors with proper context
///
/// Controllers translate these into view-state transitions; only `NotFound`
/// and `Validation` carry text intended to reach the user.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("Book not found: {id}")]
    NotFound { id: String },

    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Response decode failed: {0}")]
    Decode(String),

    #[error("Update rejected: {0}")]
    Validation(String),
}
