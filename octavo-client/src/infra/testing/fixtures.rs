//! Canned catalog entities for tests.

use octavo_model::{Book, BookId};

/// Convenience constructor for ids known to be valid.
pub fn book_id(id: &str) -> BookId {
    BookId::new(id).expect("fixture id must be non-empty")
}

/// A populated catalog entry with stable optional fields.
pub fn sample_book(id: &str, title: &str, author: &str) -> Book {
    Book {
        id: book_id(id),
        title: title.into(),
        author: author.into(),
        subtitle: None,
        publisher: Some("Octavo Press".into()),
        isbn: Some("978-0-00-000000-0".into()),
        cover_url: None,
        summary: Some("A sample entry for tests.".into()),
        page_count: Some(320),
        price: Some("15.00".into()),
    }
}
