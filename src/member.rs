use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{error::CirculationError, ids::{BookId, MemberId}};

/// A member-side record of a single borrowed book
///
/// The identifier is the reference back into the catalog; the title is
/// captured at issue time so listings need no catalog access.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Loan {
    /// Identifier of the borrowed book
    book_id: BookId,
    /// Title of the borrowed book, captured at issue time
    title: String,
}

impl Loan {
    /// Create a loan record for the given book
    #[must_use]
    pub fn new(book_id: BookId, title: impl Into<String>) -> Self {
        Self { book_id, title: title.into() }
    }

    /// Get the identifier of the borrowed book
    #[must_use]
    pub fn book_id(&self) -> &BookId {
        &self.book_id
    }

    /// Get the title of the borrowed book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.title, self.book_id)
    }
}

/// A patron and the loans they currently hold
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Member {
    /// Unique identifier, generated at creation
    id: MemberId,
    /// The patron's display name
    name: String,
    /// Loans currently held, oldest first
    borrowed: Vec<Loan>,
    /// Maximum simultaneous loans, fixed at construction
    max_limit: usize,
}

impl Member {
    /// Maximum simultaneous loans granted to every member
    pub const DEFAULT_LOAN_LIMIT: usize = 3;

    /// Create a new member with a fresh identifier and no loans
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::generate(),
            name: name.into(),
            borrowed: Vec::new(),
            max_limit: Self::DEFAULT_LOAN_LIMIT,
        }
    }

    /// Get the member's identifier
    #[must_use]
    pub fn id(&self) -> &MemberId {
        &self.id
    }

    /// Get the member's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the loans currently held, oldest first
    #[must_use]
    pub fn borrowed(&self) -> &[Loan] {
        &self.borrowed
    }

    /// Number of loans currently held
    #[must_use]
    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }

    /// Get the member's maximum simultaneous loans
    #[must_use]
    pub fn max_limit(&self) -> usize {
        self.max_limit
    }

    /// Whether the member has reached their loan limit
    #[must_use]
    pub fn at_capacity(&self) -> bool {
        self.borrowed.len() >= self.max_limit
    }

    /// Whether the member currently holds the given book
    #[must_use]
    pub fn holds(&self, book_id: &BookId) -> bool {
        self.borrowed.iter().any(|loan| loan.book_id() == book_id)
    }

    /// Take a loan, appending it to the member's list
    ///
    /// Duplicate loans for the same book are not rejected here; keeping the
    /// list consistent with book status is the library's job.
    ///
    /// # Errors
    ///
    /// Returns a [`CirculationError::LimitReached`] when the member already
    /// holds their maximum simultaneous loans; the list is left unchanged.
    pub fn borrow_book(&mut self, loan: Loan) -> Result<(), CirculationError> {
        if self.at_capacity() {
            return Err(CirculationError::LimitReached {
                name: self.name.clone(),
                limit: self.max_limit,
            });
        }

        info!(member = %self.name, book = %loan.title(), "loan taken");
        self.borrowed.push(loan);
        Ok(())
    }

    /// Give back a loan, removing the first matching entry from the list
    ///
    /// Returns `true` when the member held the book. A member that does not
    /// hold the book is an informational outcome, not an error: the call
    /// returns `false` and the list is left unchanged.
    pub fn return_book(&mut self, book_id: &BookId) -> bool {
        let Some(position) = self.borrowed.iter().position(|loan| loan.book_id() == book_id)
        else {
            warn!(member = %self.name, %book_id, "member does not hold this book");
            return false;
        };

        let loan = self.borrowed.remove(position);
        info!(member = %self.name, book = %loan.title(), "loan returned");
        true
    }

    /// Produce a human-readable listing of the loans currently held
    #[must_use]
    pub fn list_books(&self) -> String {
        if self.borrowed.is_empty() {
            return format!("{} has no books.", self.name);
        }

        let mut listing = format!("--- {}'s Books ---", self.name);
        for loan in &self.borrowed {
            listing.push('\n');
            listing.push_str(&loan.to_string());
        }
        listing
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Member: {} | ID: {} | Books: {}/{}>",
            self.name,
            self.id,
            self.borrowed.len(),
            self.max_limit
        )
    }
}
