//! In-memory stand-in for the remote books resource.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use octavo_model::{Book, BookId};

use crate::infra::api_types::{BookQuery, BookUpdate};
use crate::infra::services::books::BookService;
use crate::infra::services::{ServiceError, ServiceResult};

/// In-memory [`BookService`] used by controller tests.
///
/// Holds a mutable catalog, scripted failures per operation, and a record of
/// every call so tests can assert on gateway traffic.
#[derive(Debug, Clone, Default)]
pub struct TestBookService {
    inner: Arc<RwLock<InnerCatalogState>>,
}

#[derive(Debug, Default)]
struct InnerCatalogState {
    books: Vec<Book>,
    fetch_failure: Option<ServiceError>,
    update_failure: Option<ServiceError>,
    list_failure: Option<ServiceError>,
    fetch_calls: Vec<String>,
    update_calls: Vec<(String, BookUpdate)>,
    list_calls: Vec<BookQuery>,
}

impl TestBookService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        let service = Self::new();
        if let Ok(mut guard) = service.inner.write() {
            guard.books = books;
        }
        service
    }

    pub fn push_book(&self, book: Book) {
        if let Ok(mut guard) = self.inner.write() {
            guard.books.push(book);
        }
    }

    /// Script every subsequent fetch to fail; `None` restores normal lookup.
    pub fn set_fetch_failure(&self, failure: Option<ServiceError>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.fetch_failure = failure;
        }
    }

    /// Script every subsequent update to fail; `None` restores normal writes.
    pub fn set_update_failure(&self, failure: Option<ServiceError>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.update_failure = failure;
        }
    }

    /// Script every subsequent list to fail; `None` restores normal queries.
    pub fn set_list_failure(&self, failure: Option<ServiceError>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.list_failure = failure;
        }
    }

    /// Ids passed to [`BookService::fetch_book`], in call order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.inner.read().expect("lock poisoned").fetch_calls.clone()
    }

    /// Id and payload of every [`BookService::update_book`] call.
    pub fn update_calls(&self) -> Vec<(String, BookUpdate)> {
        self.inner.read().expect("lock poisoned").update_calls.clone()
    }

    /// Queries passed to [`BookService::list_books`], in call order.
    pub fn list_calls(&self) -> Vec<BookQuery> {
        self.inner.read().expect("lock poisoned").list_calls.clone()
    }

    /// Current stored entity for `id`, if any.
    pub fn stored_book(&self, id: &BookId) -> Option<Book> {
        self.inner
            .read()
            .expect("lock poisoned")
            .books
            .iter()
            .find(|book| &book.id == id)
            .cloned()
    }
}

#[async_trait]
impl BookService for TestBookService {
    async fn fetch_book(&self, id: &BookId) -> ServiceResult<Book> {
        let mut guard = self.inner.write().expect("lock poisoned");
        guard.fetch_calls.push(id.to_string());
        if let Some(failure) = guard.fetch_failure.clone() {
            return Err(failure);
        }
        guard
            .books
            .iter()
            .find(|book| &book.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound { id: id.to_string() })
    }

    async fn update_book(&self, id: &BookId, update: &BookUpdate) -> ServiceResult<Book> {
        let mut guard = self.inner.write().expect("lock poisoned");
        guard.update_calls.push((id.to_string(), update.clone()));
        if let Some(failure) = guard.update_failure.clone() {
            return Err(failure);
        }
        let Some(book) = guard.books.iter_mut().find(|book| &book.id == id) else {
            return Err(ServiceError::NotFound { id: id.to_string() });
        };
        book.title = update.title.clone();
        book.author = update.author.clone();
        book.subtitle = update.subtitle.clone();
        book.publisher = update.publisher.clone();
        book.isbn = update.isbn.clone();
        book.cover_url = update.cover_url.clone();
        book.summary = update.summary.clone();
        book.page_count = update.page_count;
        book.price = update.price.clone();
        Ok(book.clone())
    }

    async fn list_books(&self, query: &BookQuery) -> ServiceResult<Vec<Book>> {
        let mut guard = self.inner.write().expect("lock poisoned");
        guard.list_calls.push(query.clone());
        if let Some(failure) = guard.list_failure.clone() {
            return Err(failure);
        }
        let mut books: Vec<Book> = match &query.q {
            Some(term) => {
                let needle = term.to_lowercase();
                guard
                    .books
                    .iter()
                    .filter(|book| {
                        book.title.to_lowercase().contains(&needle)
                            || book.author.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect()
            }
            None => guard.books.clone(),
        };
        if let Some(limit) = query.limit {
            books.truncate(limit as usize);
        }
        Ok(books)
    }
}
