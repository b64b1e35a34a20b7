//! Wire-format request types for the books resource.

use serde::Serialize;

/// Full-snapshot update payload for `PUT /books/{id}`.
///
/// Mirrors the editable fields of [`octavo_model::Book`]; identity travels in
/// the URL, not the body. Empty optional fields are omitted rather than sent
/// as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// Query parameters for `GET /books`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookQuery {
    /// Maximum number of results (`_limit` on the wire).
    #[serde(rename = "_limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Full-text search term (`q` on the wire).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}
