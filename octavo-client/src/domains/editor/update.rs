//! Edit view update logic.

use std::sync::Arc;

use octavo_model::Book;

use crate::common::effects::Effect;
use crate::common::messages::{Command, Update};
use crate::domains::details::{self, ViewState, update_details};
use crate::infra::services::ServiceError;

use super::draft::{BookDraft, Field};
use super::messages::Message;
use super::state::SaveState;
use super::{BookEditor, SAVE_FAILED};

/// Advance the edit view state machine.
pub fn update_editor(editor: &mut BookEditor, message: Message) -> Update<Message> {
    log::debug!("[Editor] {}", message.name());
    match message {
        Message::Details(inner) => handle_details(editor, inner),
        Message::FieldChanged { field, value } => handle_field_changed(editor, field, value),
        Message::SaveRequested => handle_save_requested(editor),
        Message::SaveCompleted { generation, result } => {
            handle_save_completed(editor, generation, result)
        }
    }
}

fn handle_details(editor: &mut BookEditor, message: details::Message) -> Update<Message> {
    if matches!(message, details::Message::Initialize(_)) {
        // A fresh activation invalidates the draft and any in-flight save.
        editor.generation = editor.generation.wrapping_add(1);
        editor.draft = None;
        editor.save_state = SaveState::Idle;
    }

    let update = update_details(&mut editor.details, message);

    // Hydrate exactly once per successful load; later detail refreshes (for
    // example after a save) leave the working draft alone.
    if editor.draft.is_none()
        && let Some(book) = editor.details.view_state().book()
    {
        editor.draft = Some(BookDraft::hydrate(book));
    }

    update.map(Message::Details)
}

fn handle_field_changed(editor: &mut BookEditor, field: Field, value: String) -> Update<Message> {
    if let Some(draft) = editor.draft.as_mut() {
        draft.set_field(field, value);
    } else {
        log::warn!("[Editor] Ignoring field change before a draft exists");
    }
    Update::none()
}

fn handle_save_requested(editor: &mut BookEditor) -> Update<Message> {
    if editor.save_state.is_saving() {
        log::debug!("[Editor] Save already in flight; ignoring duplicate submit");
        return Update::none();
    }
    if !editor.details.view_state().is_loaded() {
        log::debug!("[Editor] Submit ignored; nothing loaded to save");
        return Update::none();
    }
    let Some(book_id) = editor.details.book_id().cloned() else {
        return Update::none();
    };
    let Some(payload) = editor.draft.as_ref().and_then(BookDraft::to_update) else {
        log::debug!("[Editor] Draft does not validate; submit ignored");
        return Update::none();
    };

    editor.save_state = SaveState::Saving;

    let service = Arc::clone(&editor.details.service);
    let generation = editor.generation;
    Update::command(Command::perform(
        async move { service.update_book(&book_id, &payload).await },
        move |result| Message::SaveCompleted { generation, result },
    ))
}

fn handle_save_completed(
    editor: &mut BookEditor,
    generation: u64,
    result: Result<Book, ServiceError>,
) -> Update<Message> {
    if editor.generation != generation {
        log::debug!("[Editor] Discarding stale save result (generation {generation})");
        return Update::none();
    }
    if !editor.save_state.is_saving() {
        log::warn!("[Editor] Save completion arrived while not saving; ignoring");
        return Update::none();
    }

    match result {
        Ok(book) => {
            log::info!("[Editor] Saved book {}", book.id);
            editor.save_state = SaveState::Idle;
            if let Some(draft) = editor.draft.as_mut() {
                draft.mark_synced(&book);
            }
            let path = format!("/books/{}", book.id);
            editor.details.view_state = ViewState::Loaded(book);
            Update::effect(Effect::RequestNavigate { path })
        }
        Err(error) => {
            log::error!("[Editor] Failed to save book: {error}");
            let message = match &error {
                ServiceError::Validation(detail) if !detail.trim().is_empty() => detail.clone(),
                _ => SAVE_FAILED.to_string(),
            };
            editor.save_state = SaveState::SaveError { message };
            Update::none()
        }
    }
}
