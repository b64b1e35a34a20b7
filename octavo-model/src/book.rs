use crate::ids::BookId;

/// A single catalog entry as served by the remote books resource.
///
/// Field names on the wire are camelCase (`coverUrl`, `pageCount`). Required
/// fields are plain values so a payload missing them fails to decode instead
/// of being silently coerced; optional fields absent on the wire become
/// `None`, never empty strings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub subtitle: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub publisher: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub isbn: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cover_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub summary: Option<String>,
    /// Page count is non-negative by type; negative wire values fail decode.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub page_count: Option<u32>,
    /// Price as a display string; currency formatting is the caller's concern.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub price: Option<String>,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_fields() {
        let book: Book = serde_json::from_str(
            r#"{
                "id": "42",
                "title": "Dune",
                "author": "Frank Herbert",
                "pageCount": 412,
                "coverUrl": "http://localhost:4730/covers/42.jpg"
            }"#,
        )
        .expect("entity should decode");

        assert_eq!(book.id.as_str(), "42");
        assert_eq!(book.page_count, Some(412));
        assert_eq!(
            book.cover_url.as_deref(),
            Some("http://localhost:4730/covers/42.jpg")
        );
        assert_eq!(book.subtitle, None);
        assert_eq!(book.price, None);
    }

    #[test]
    fn missing_required_fields_fail_decode() {
        let result: Result<Book, _> =
            serde_json::from_str(r#"{"id": "42", "title": "Dune"}"#);
        assert!(result.is_err(), "author is required");
    }

    #[test]
    fn negative_page_count_fails_decode() {
        let result: Result<Book, _> = serde_json::from_str(
            r#"{"id": "42", "title": "Dune", "author": "Frank Herbert", "pageCount": -1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn serializes_without_absent_optionals() {
        let book = Book {
            id: BookId::new("7").expect("valid id"),
            title: "Solaris".to_string(),
            author: "Stanislaw Lem".to_string(),
            subtitle: None,
            publisher: None,
            isbn: None,
            cover_url: None,
            summary: None,
            page_count: Some(204),
            price: None,
        };

        let value = serde_json::to_value(&book).expect("entity should encode");
        let object = value.as_object().expect("entity encodes as an object");
        assert!(object.contains_key("pageCount"));
        assert!(!object.contains_key("subtitle"));
        assert!(!object.contains_key("coverUrl"));
    }
}
