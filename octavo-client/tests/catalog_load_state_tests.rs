//! Catalog load state machine tests
//!
//! These tests validate idempotent list loading, retry on failure, query
//! changes superseding in-flight requests, and search/limit handling.

use std::sync::Arc;

use octavo_client::domains::catalog::{
    BookCatalog, CatalogState, DEFAULT_PAGE_SIZE, LIST_FAILED, Message, update_catalog,
};
use octavo_client::infra::services::ServiceError;
use octavo_client::infra::testing::fixtures::sample_book;
use octavo_client::infra::testing::stubs::TestBookService;

fn make_catalog(service: &TestBookService) -> BookCatalog {
    BookCatalog::new(Arc::new(service.clone()))
}

/// Apply a message and run any follow-up work to completion.
async fn drive(catalog: &mut BookCatalog, message: Message) {
    let mut update = update_catalog(catalog, message);
    while let Some(command) = update.command.take() {
        update = update_catalog(catalog, command.run().await);
    }
}

#[tokio::test]
async fn first_load_transitions_through_loading_to_loaded() {
    let service = TestBookService::with_books(vec![
        sample_book("1", "Dune", "Frank Herbert"),
        sample_book("2", "Emma", "Jane Austen"),
    ]);
    let mut catalog = make_catalog(&service);

    match catalog.load_state() {
        CatalogState::NotStarted => {}
        other => panic!("expected NotStarted, got {other:?}"),
    }

    let mut update = update_catalog(&mut catalog, Message::Load);
    match catalog.load_state() {
        CatalogState::Loading => {}
        other => panic!("expected Loading, got {other:?}"),
    }

    let command = update.command.take().expect("load issues a list request");
    let _ = update_catalog(&mut catalog, command.run().await);

    match catalog.load_state() {
        CatalogState::Loaded { books } => assert_eq!(books.len(), 2),
        other => panic!("expected Loaded, got {other:?}"),
    }

    let calls = service.list_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].limit, Some(DEFAULT_PAGE_SIZE));
    assert_eq!(calls[0].q, None);
}

#[tokio::test]
async fn duplicate_load_while_in_flight_is_idempotent() {
    let service = TestBookService::with_books(vec![sample_book(
        "1",
        "Dune",
        "Frank Herbert",
    )]);
    let mut catalog = make_catalog(&service);

    let mut first = update_catalog(&mut catalog, Message::Load);
    let command = first.command.take().expect("load issues a list request");

    // Duplicate load while in flight.
    let second = update_catalog(&mut catalog, Message::Load);
    assert!(second.command.is_none());

    let _ = update_catalog(&mut catalog, command.run().await);
    match catalog.load_state() {
        CatalogState::Loaded { books } => assert_eq!(books.len(), 1),
        other => panic!("expected Loaded, got {other:?}"),
    }
    assert_eq!(service.list_calls().len(), 1);
}

#[tokio::test]
async fn failure_transitions_to_failed_and_allows_retry() {
    let service = TestBookService::with_books(vec![sample_book(
        "1",
        "Dune",
        "Frank Herbert",
    )]);
    service.set_list_failure(Some(ServiceError::Transport(
        "connection refused".to_string(),
    )));
    let mut catalog = make_catalog(&service);

    drive(&mut catalog, Message::Load).await;
    match catalog.load_state() {
        CatalogState::Failed { .. } => {}
        other => panic!("expected Failed, got {other:?}"),
    }
    assert_eq!(catalog.load_state().error_message(), Some(LIST_FAILED));

    // The outage clears and a new title appears before the retry.
    service.set_list_failure(None);
    service.push_book(sample_book("2", "Emma", "Jane Austen"));
    drive(&mut catalog, Message::Load).await;
    match catalog.load_state() {
        CatalogState::Loaded { books } => assert_eq!(books.len(), 2),
        other => panic!("retry should reach Loaded, got {other:?}"),
    }
}

#[tokio::test]
async fn changed_search_supersedes_the_in_flight_load() {
    let service = TestBookService::with_books(vec![
        sample_book("1", "Dune", "Frank Herbert"),
        sample_book("2", "Emma", "Jane Austen"),
    ]);
    let mut catalog = make_catalog(&service);

    let mut first = update_catalog(&mut catalog, Message::Load);
    let stale_list = first.command.take().expect("load issues a list request");

    // The user types before the unfiltered load lands.
    let mut second = update_catalog(&mut catalog, Message::SearchChanged("dune".to_string()));
    let filtered_list = second.command.take().expect("search reloads");

    let _ = update_catalog(&mut catalog, filtered_list.run().await);
    match catalog.load_state() {
        CatalogState::Loaded { books } => {
            assert_eq!(books.len(), 1);
            assert_eq!(books[0].title, "Dune");
        }
        other => panic!("expected filtered Loaded, got {other:?}"),
    }

    // The unfiltered result resolves late; it must be discarded.
    let update = update_catalog(&mut catalog, stale_list.run().await);
    assert!(update.is_empty());
    match catalog.load_state() {
        CatalogState::Loaded { books } => assert_eq!(books.len(), 1),
        other => panic!("stale result must not apply, got {other:?}"),
    }

    // Calls record in execution order; the filtered request ran first.
    let calls = service.list_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].q, Some("dune".to_string()));
    assert_eq!(calls[1].q, None);
}

#[tokio::test]
async fn search_input_is_trimmed_and_identical_queries_do_not_reload() {
    let service = TestBookService::with_books(vec![
        sample_book("1", "Dune", "Frank Herbert"),
        sample_book("2", "Emma", "Jane Austen"),
    ]);
    let mut catalog = make_catalog(&service);

    drive(&mut catalog, Message::Load).await;
    drive(&mut catalog, Message::SearchChanged("  dune ".to_string())).await;
    assert_eq!(catalog.query().q, Some("dune".to_string()));

    // Same effective query; nothing to do.
    let update = update_catalog(&mut catalog, Message::SearchChanged("dune".to_string()));
    assert!(update.is_empty());

    // Whitespace-only input clears the filter and reloads.
    drive(&mut catalog, Message::SearchChanged("   ".to_string())).await;
    assert_eq!(catalog.query().q, None);
    match catalog.load_state() {
        CatalogState::Loaded { books } => assert_eq!(books.len(), 2),
        other => panic!("expected unfiltered Loaded, got {other:?}"),
    }

    let calls = service.list_calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1].q, Some("dune".to_string()));
    assert_eq!(calls[2].q, None);
}

#[tokio::test]
async fn limit_changes_reload_with_the_new_page_size() {
    let service = TestBookService::with_books(vec![
        sample_book("1", "Dune", "Frank Herbert"),
        sample_book("2", "Emma", "Jane Austen"),
        sample_book("3", "Ulysses", "James Joyce"),
    ]);
    let mut catalog = make_catalog(&service);

    drive(&mut catalog, Message::LimitChanged(2)).await;

    let books = catalog.load_state().books().expect("limited load lands");
    assert_eq!(books.len(), 2);
    let calls = service.list_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].limit, Some(2));
}
