use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    book_state::BookStatus,
    error::CirculationError,
    events::{HistoryEntry, LoanEvent},
    ids::BookId,
};

/// A catalog item and its lending status
///
/// Books are created standalone and registered into a
/// [`Library`](crate::library::Library), which then owns them for the rest
/// of the process. There is no removal operation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Book {
    /// Unique identifier, generated at creation
    id: BookId,
    /// Title of the work
    title: String,
    /// Author of the work
    author: String,
    /// International Standard Book Number
    isbn: String,
    /// Current lending status
    status: BookStatus,
    /// Append-only log of status-change events
    history: Vec<HistoryEntry>,
}

impl Book {
    /// Create a new book with a fresh identifier, available and with an
    /// empty history
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: BookId::generate(),
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: BookStatus::Available,
            history: Vec::new(),
        }
    }

    /// Get the book's identifier
    #[must_use]
    pub fn id(&self) -> &BookId {
        &self.id
    }

    /// Get the book's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the book's author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Get the book's ISBN
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Get the current lending status
    #[must_use]
    pub fn status(&self) -> BookStatus {
        self.status
    }

    /// Get the append-only history of status-change events
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Whether the book is eligible to be issued
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// Mark the book as borrowed, appending a history entry
    ///
    /// # Errors
    ///
    /// Returns a [`CirculationError::BookUnavailable`] naming the current
    /// status when the book is not available; the book is left unchanged.
    pub fn mark_borrowed(&mut self) -> Result<(), CirculationError> {
        if !self.is_available() {
            return Err(CirculationError::BookUnavailable {
                title: self.title.clone(),
                status: self.status,
            });
        }

        self.status = BookStatus::Borrowed;
        self.history.push(HistoryEntry::record(LoanEvent::Borrowed));
        info!(book = %self.title, "borrowed");
        Ok(())
    }

    /// Mark the book as returned, appending a history entry
    ///
    /// # Errors
    ///
    /// Returns a [`CirculationError::BookNotBorrowed`] when the book is not
    /// currently borrowed; the book is left unchanged.
    pub fn mark_returned(&mut self) -> Result<(), CirculationError> {
        if self.status != BookStatus::Borrowed {
            return Err(CirculationError::BookNotBorrowed { title: self.title.clone() });
        }

        self.status = BookStatus::Available;
        self.history.push(HistoryEntry::record(LoanEvent::Returned));
        info!(book = %self.title, "returned");
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Book: {} | ID: {} | Status: {}>", self.title, self.id, self.status)
    }
}

// Include tests module
#[cfg(test)]
mod tests;
