use thiserror::Error;

use crate::book_state::BookStatus;

/// Errors raised by book and member operations
///
/// Every variant is caught at the library transaction boundary and
/// converted into a reported outcome; none propagates past it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CirculationError {
    /// A borrow was attempted while the book was not available
    #[error("book '{title}' is currently {status}")]
    BookUnavailable {
        /// Title of the book
        title: String,
        /// The status that blocked the borrow
        status: BookStatus,
    },

    /// A member attempted to exceed their maximum simultaneous loans
    #[error("member {name} has reached the limit of {limit} books")]
    LimitReached {
        /// Name of the member
        name: String,
        /// The member's maximum simultaneous loans
        limit: usize,
    },

    /// A return was attempted while the book was not borrowed
    #[error("book '{title}' is not currently borrowed")]
    BookNotBorrowed {
        /// Title of the book
        title: String,
    },
}
