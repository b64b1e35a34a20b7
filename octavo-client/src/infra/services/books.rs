//! Book catalog service trait and its HTTP implementation.

use async_trait::async_trait;
use octavo_model::{Book, BookId};

use crate::infra::api_client::ApiClient;
use crate::infra::api_types::{BookQuery, BookUpdate};
use crate::infra::constants::routes;
use crate::infra::services::{ServiceError, ServiceResult};

/// Abstraction over the remote books resource.
///
/// Controllers hold this as `Arc<dyn BookService>` so tests can substitute an
/// in-memory stub for the HTTP client.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Fetch a single book by id.
    ///
    /// Fails with [`ServiceError::NotFound`] when the resource reports no
    /// entity under `id`.
    async fn fetch_book(&self, id: &BookId) -> ServiceResult<Book>;

    /// Replace a book's editable fields, returning the stored entity.
    async fn update_book(&self, id: &BookId, update: &BookUpdate) -> ServiceResult<Book>;

    /// List books matching the query.
    async fn list_books(&self, query: &BookQuery) -> ServiceResult<Vec<Book>>;
}

#[async_trait]
impl BookService for ApiClient {
    async fn fetch_book(&self, id: &BookId) -> ServiceResult<Book> {
        match self.get(&routes::books::by_id(id.as_str())).await {
            // Pin the reported id to the requested one; URL parsing is only a
            // fallback.
            Err(ServiceError::NotFound { .. }) => Err(ServiceError::NotFound {
                id: id.to_string(),
            }),
            other => other,
        }
    }

    async fn update_book(&self, id: &BookId, update: &BookUpdate) -> ServiceResult<Book> {
        match self.put(&routes::books::by_id(id.as_str()), update).await {
            Err(ServiceError::NotFound { .. }) => Err(ServiceError::NotFound {
                id: id.to_string(),
            }),
            other => other,
        }
    }

    async fn list_books(&self, query: &BookQuery) -> ServiceResult<Vec<Book>> {
        self.get_query(routes::books::COLLECTION, query).await
    }
}
