//! Editable draft of a catalog entry.

use octavo_model::Book;

use crate::infra::api_types::BookUpdate;

/// Editable draft fields addressable by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Subtitle,
    Author,
    Publisher,
    Isbn,
    PageCount,
    Price,
    CoverUrl,
    Summary,
}

/// Raw form values for one field set.
///
/// Every field is held as the user-entered string; numeric fields are parsed
/// only at validation and payload time, never coerced on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct DraftFields {
    title: String,
    subtitle: String,
    author: String,
    publisher: String,
    isbn: String,
    page_count: String,
    price: String,
    cover_url: String,
    summary: String,
}

impl DraftFields {
    fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            subtitle: book.subtitle.clone().unwrap_or_default(),
            author: book.author.clone(),
            publisher: book.publisher.clone().unwrap_or_default(),
            isbn: book.isbn.clone().unwrap_or_default(),
            page_count: book
                .page_count
                .map(|count| count.to_string())
                .unwrap_or_default(),
            price: book.price.clone().unwrap_or_default(),
            cover_url: book.cover_url.clone().unwrap_or_default(),
            summary: book.summary.clone().unwrap_or_default(),
        }
    }
}

/// Working copy of a loaded entity plus the snapshot it is diffed against.
///
/// The snapshot holds the values as of the most recent successful fetch or
/// save; dirtiness is field inequality against it. The fetched entity itself
/// is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    fields: DraftFields,
    synced: DraftFields,
}

impl BookDraft {
    /// Build a draft from a freshly loaded entity; the entity's values become
    /// the last-synced snapshot.
    pub fn hydrate(book: &Book) -> Self {
        let fields = DraftFields::from_book(book);
        Self {
            synced: fields.clone(),
            fields,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.fields.title,
            Field::Subtitle => &self.fields.subtitle,
            Field::Author => &self.fields.author,
            Field::Publisher => &self.fields.publisher,
            Field::Isbn => &self.fields.isbn,
            Field::PageCount => &self.fields.page_count,
            Field::Price => &self.fields.price,
            Field::CoverUrl => &self.fields.cover_url,
            Field::Summary => &self.fields.summary,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.fields.title = value,
            Field::Subtitle => self.fields.subtitle = value,
            Field::Author => self.fields.author = value,
            Field::Publisher => self.fields.publisher = value,
            Field::Isbn => self.fields.isbn = value,
            Field::PageCount => self.fields.page_count = value,
            Field::Price => self.fields.price = value,
            Field::CoverUrl => self.fields.cover_url = value,
            Field::Summary => self.fields.summary = value,
        }
    }

    /// True when any field differs from the last-synced snapshot.
    pub fn is_dirty(&self) -> bool {
        self.fields != self.synced
    }

    /// True when required fields are present and the page count parses.
    pub fn is_valid(&self) -> bool {
        !self.fields.title.trim().is_empty()
            && !self.fields.author.trim().is_empty()
            && parse_page_count(&self.fields.page_count).is_ok()
    }

    /// Full-snapshot write payload; identity travels in the URL, not here.
    ///
    /// Returns `None` when the draft does not validate, so an invalid draft
    /// can never reach the wire.
    pub fn to_update(&self) -> Option<BookUpdate> {
        if self.fields.title.trim().is_empty() || self.fields.author.trim().is_empty() {
            return None;
        }
        let page_count = parse_page_count(&self.fields.page_count).ok()?;
        Some(BookUpdate {
            title: self.fields.title.clone(),
            author: self.fields.author.clone(),
            subtitle: optional(&self.fields.subtitle),
            publisher: optional(&self.fields.publisher),
            isbn: optional(&self.fields.isbn),
            cover_url: optional(&self.fields.cover_url),
            summary: optional(&self.fields.summary),
            page_count,
            price: optional(&self.fields.price),
        })
    }

    /// Adopt the persisted entity's values as the new last-synced snapshot.
    ///
    /// Edits made while the save was in flight stay in `fields` and show up
    /// as dirty against the new snapshot.
    pub fn mark_synced(&mut self, book: &Book) {
        self.synced = DraftFields::from_book(book);
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_page_count(value: &str) -> Result<Option<u32>, std::num::ParseIntError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<u32>().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use octavo_model::BookId;

    fn make_book() -> Book {
        Book {
            id: BookId::new("42").expect("valid id"),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            subtitle: None,
            publisher: Some("Chilton".to_string()),
            isbn: None,
            cover_url: None,
            summary: None,
            page_count: Some(412),
            price: Some("9.99".to_string()),
        }
    }

    #[test]
    fn hydrated_draft_is_clean_and_valid() {
        let draft = BookDraft::hydrate(&make_book());
        assert!(!draft.is_dirty());
        assert!(draft.is_valid());
        assert_eq!(draft.field(Field::Title), "Dune");
        assert_eq!(draft.field(Field::PageCount), "412");
        assert_eq!(draft.field(Field::Subtitle), "");
    }

    #[test]
    fn edits_toggle_dirtiness_and_restoring_clears_it() {
        let mut draft = BookDraft::hydrate(&make_book());
        draft.set_field(Field::Title, "Dune Messiah".to_string());
        assert!(draft.is_dirty());
        draft.set_field(Field::Title, "Dune".to_string());
        assert!(!draft.is_dirty());
    }

    #[test]
    fn blank_required_fields_invalidate_the_draft() {
        let mut draft = BookDraft::hydrate(&make_book());
        draft.set_field(Field::Title, String::new());
        assert!(!draft.is_valid());
        assert!(draft.to_update().is_none());

        draft.set_field(Field::Title, "   ".to_string());
        assert!(!draft.is_valid());
    }

    #[test]
    fn page_count_must_be_empty_or_a_non_negative_integer() {
        let mut draft = BookDraft::hydrate(&make_book());

        draft.set_field(Field::PageCount, "abc".to_string());
        assert!(!draft.is_valid());

        draft.set_field(Field::PageCount, "-3".to_string());
        assert!(!draft.is_valid());

        draft.set_field(Field::PageCount, String::new());
        assert!(draft.is_valid());
        let payload = draft.to_update().expect("empty page count is valid");
        assert_eq!(payload.page_count, None);

        draft.set_field(Field::PageCount, " 412 ".to_string());
        assert!(draft.is_valid());
        let payload = draft.to_update().expect("trimmed page count parses");
        assert_eq!(payload.page_count, Some(412));
    }

    #[test]
    fn unchanged_draft_round_trips_the_entity() {
        let book = make_book();
        let draft = BookDraft::hydrate(&book);
        let payload = draft.to_update().expect("hydrated draft validates");

        assert_eq!(payload.title, book.title);
        assert_eq!(payload.author, book.author);
        assert_eq!(payload.subtitle, book.subtitle);
        assert_eq!(payload.publisher, book.publisher);
        assert_eq!(payload.page_count, book.page_count);
        assert_eq!(payload.price, book.price);
    }

    #[test]
    fn mark_synced_rebases_dirtiness_on_the_persisted_entity() {
        let mut draft = BookDraft::hydrate(&make_book());
        draft.set_field(Field::Subtitle, "Special Ed.".to_string());
        assert!(draft.is_dirty());

        let mut saved = make_book();
        saved.subtitle = Some("Special Ed.".to_string());
        draft.mark_synced(&saved);
        assert!(!draft.is_dirty());
    }
}
