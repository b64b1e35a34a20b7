//! Catalog view update logic.

use std::sync::Arc;

use octavo_model::Book;

use crate::common::messages::{Command, Update};
use crate::infra::services::ServiceResult;

use super::messages::Message;
use super::state::CatalogState;
use super::{BookCatalog, LIST_FAILED};

/// Advance the browse list state machine.
pub fn update_catalog(catalog: &mut BookCatalog, message: Message) -> Update<Message> {
    log::debug!("[Catalog] {}", message.name());
    match message {
        Message::Load => handle_load(catalog, false),
        Message::SearchChanged(input) => handle_search_changed(catalog, input),
        Message::LimitChanged(limit) => {
            catalog.query.limit = Some(limit);
            handle_load(catalog, true)
        }
        Message::BooksFetched { generation, result } => {
            handle_books_fetched(catalog, generation, result)
        }
    }
}

fn handle_search_changed(catalog: &mut BookCatalog, input: String) -> Update<Message> {
    let trimmed = input.trim();
    let q = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    };
    if catalog.query.q == q {
        return Update::none();
    }
    catalog.query.q = q;
    handle_load(catalog, true)
}

fn handle_load(catalog: &mut BookCatalog, supersede: bool) -> Update<Message> {
    if catalog.load_state.is_loading() && !supersede {
        log::debug!("[Catalog] Load already in flight, ignoring");
        return Update::none();
    }

    catalog.generation = catalog.generation.wrapping_add(1);
    let generation = catalog.generation;
    catalog.load_state = CatalogState::Loading;

    let service = Arc::clone(&catalog.service);
    let query = catalog.query.clone();
    Update::command(Command::perform(
        async move { service.list_books(&query).await },
        move |result| Message::BooksFetched { generation, result },
    ))
}

fn handle_books_fetched(
    catalog: &mut BookCatalog,
    generation: u64,
    result: ServiceResult<Vec<Book>>,
) -> Update<Message> {
    if generation != catalog.generation {
        log::debug!("[Catalog] Discarding stale list result");
        return Update::none();
    }

    match result {
        Ok(books) => {
            log::info!("[Catalog] Loaded {} books", books.len());
            catalog.load_state = CatalogState::Loaded { books };
        }
        Err(err) => {
            log::error!("[Catalog] List load failed: {err}");
            catalog.load_state = CatalogState::Failed {
                message: LIST_FAILED.to_string(),
            };
        }
    }
    Update::none()
}
