//! Detail view update logic.

use std::sync::Arc;

use octavo_model::{Book, BookId};

use crate::common::messages::{Command, Update};
use crate::infra::services::ServiceError;

use super::messages::Message;
use super::state::ViewState;
use super::{BookDetails, LOAD_FAILED, MISSING_ID};

/// Advance the detail view state machine.
pub fn update_details(details: &mut BookDetails, message: Message) -> Update<Message> {
    log::debug!("[Details] {}", message.name());
    match message {
        Message::Initialize(book_id) => initialize(details, book_id),
        Message::BookFetched { generation, result } => {
            handle_book_fetched(details, generation, result)
        }
    }
}

fn initialize(details: &mut BookDetails, book_id: Option<BookId>) -> Update<Message> {
    // Each activation gets a fresh generation so an in-flight fetch from the
    // previous one can no longer apply.
    details.generation = details.generation.wrapping_add(1);

    let Some(book_id) = book_id else {
        log::warn!("[Details] Activated without a book id");
        details.book_id = None;
        details.view_state = ViewState::Error {
            message: MISSING_ID.to_string(),
        };
        return Update::none();
    };

    details.book_id = Some(book_id.clone());
    details.view_state = ViewState::Loading;

    let service = Arc::clone(&details.service);
    let generation = details.generation;
    Update::command(Command::perform(
        async move { service.fetch_book(&book_id).await },
        move |result| Message::BookFetched { generation, result },
    ))
}

fn handle_book_fetched(
    details: &mut BookDetails,
    generation: u64,
    result: Result<Book, ServiceError>,
) -> Update<Message> {
    if !details.is_generation(generation) {
        log::debug!("[Details] Discarding stale fetch result (generation {generation})");
        return Update::none();
    }

    match result {
        Ok(book) => {
            log::info!("[Details] Loaded book {}", book.id);
            details.view_state = ViewState::Loaded(book);
        }
        Err(ServiceError::NotFound { id }) => {
            log::debug!("[Details] Book {id} not found");
            details.view_state = ViewState::NotFound;
        }
        Err(error) => {
            log::error!("[Details] Failed to load book: {error}");
            details.view_state = ViewState::Error {
                message: LOAD_FAILED.to_string(),
            };
        }
    }
    Update::none()
}
