use crate::{
    book::Book, book_state::BookStatus, error::CirculationError, events::LoanEvent,
};

/// Helper function to create a catalog book for tests
fn test_book() -> Book {
    Book::new("Clean Code", "Robert Martin", "978-01")
}

#[test]
fn new_book_is_available_with_empty_history() {
    let book = test_book();
    assert!(book.is_available());
    assert_eq!(book.status(), BookStatus::Available);
    assert!(book.history().is_empty());
    assert_eq!(book.author(), "Robert Martin");
    assert_eq!(book.isbn(), "978-01");
}

#[test]
fn display_names_title_id_and_status() {
    let book = test_book();
    let rendered = book.to_string();
    assert!(rendered.starts_with("<Book: Clean Code | ID: "));
    assert!(rendered.ends_with("| Status: Available>"));
}

#[test]
fn mark_borrowed_transitions_and_records_history() {
    let mut book = test_book();
    assert!(book.mark_borrowed().is_ok());
    assert!(!book.is_available());
    assert_eq!(book.status(), BookStatus::Borrowed);
    assert!(matches!(
        book.history().first(),
        Some(entry) if entry.event == LoanEvent::Borrowed
    ));
}

#[test]
fn mark_borrowed_twice_fails_and_leaves_state_unchanged() {
    let mut book = test_book();
    drop(book.mark_borrowed());

    let result = book.mark_borrowed();
    assert_eq!(
        result,
        Err(CirculationError::BookUnavailable {
            title: "Clean Code".to_string(),
            status: BookStatus::Borrowed,
        })
    );
    assert_eq!(book.status(), BookStatus::Borrowed);
    assert_eq!(book.history().len(), 1);
}

#[test]
#[allow(clippy::expect_used)]
fn unavailable_error_names_the_current_status() {
    let mut book = test_book();
    drop(book.mark_borrowed());

    let err = book.mark_borrowed().expect_err("second borrow must fail");
    assert_eq!(err.to_string(), "book 'Clean Code' is currently Borrowed");
}

#[test]
fn borrow_then_return_restores_availability() {
    let mut book = test_book();
    drop(book.mark_borrowed());

    assert!(book.mark_returned().is_ok());
    assert!(book.is_available());

    // History holds exactly the two transitions, in order
    let events: Vec<LoanEvent> = book.history().iter().map(|entry| entry.event).collect();
    assert_eq!(events, vec![LoanEvent::Borrowed, LoanEvent::Returned]);
}

#[test]
fn mark_returned_requires_a_borrowed_book() {
    let mut book = test_book();
    let result = book.mark_returned();
    assert_eq!(
        result,
        Err(CirculationError::BookNotBorrowed { title: "Clean Code".to_string() })
    );
    assert!(book.is_available());
    assert!(book.history().is_empty());
}

#[test]
#[allow(clippy::expect_used)]
fn serializes_with_status_and_history() {
    let mut book = test_book();
    drop(book.mark_borrowed());

    let json = serde_json::to_string(&book).expect("book must serialize");
    let restored: Book = serde_json::from_str(&json).expect("book must deserialize");
    assert_eq!(restored.id(), book.id());
    assert_eq!(restored.status(), BookStatus::Borrowed);
    assert_eq!(restored.history().len(), 1);
}
