use std::{collections::HashMap, fmt};

use tracing::{info, warn};

use crate::{
    book::Book,
    error::CirculationError,
    events::LoanEvent,
    ids::{BookId, MemberId},
    member::{Loan, Member},
    observers::TransactionObserver,
};

/// Reported result of an issue or return transaction
///
/// Unknown identifiers and unheld books are informational outcomes, not
/// errors; `Refused` wraps an entity error caught at this boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransactionOutcome {
    /// Both entities were mutated and the transaction completed
    Completed,
    /// No member is registered under the given identifier
    UnknownMember(MemberId),
    /// No book is held in the catalog under the given identifier
    UnknownBook(BookId),
    /// The member does not currently hold the book
    NotHeld {
        /// The member that attempted the return
        member: MemberId,
        /// The book that was not held
        book: BookId,
    },
    /// The transaction was refused before any state changed
    Refused(CirculationError),
}

/// In-memory library owning the book catalog and the member register
///
/// The library is the sole mutator of both collections: every issue and
/// return goes through it, keeping each book's status consistent with the
/// loan lists of the members. One instance serves the whole process; it is
/// an explicit, constructed value, never ambient state.
#[derive(Default)]
pub struct Library {
    /// All books, keyed by identifier
    books: HashMap<BookId, Book>,
    /// All members, keyed by identifier
    members: HashMap<MemberId, Member>,
    /// Observers notified after each completed transaction
    observers: Vec<Box<dyn TransactionObserver>>,
}

// Manual implementation of Debug for Library
impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.books)
            .field("members", &self.members)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Library {
    /// Create an empty library
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the catalog, keyed by its identifier
    ///
    /// A colliding identifier overwrites the previous entry; identifiers
    /// are generated randomly, so collisions are statistically negligible.
    pub fn add_book(&mut self, book: Book) -> BookId {
        let id = book.id().clone();
        info!(book = %book.title(), %id, "added to catalog");
        self.books.insert(id.clone(), book);
        id
    }

    /// Register a member, keyed by their identifier
    ///
    /// Same overwrite behavior as [`Library::add_book`].
    pub fn register_member(&mut self, member: Member) -> MemberId {
        let id = member.id().clone();
        info!(member = %member.name(), %id, "member registered");
        self.members.insert(id.clone(), member);
        id
    }

    /// Register an observer to be notified of completed transactions
    pub fn register_observer(&mut self, observer: Box<dyn TransactionObserver>) {
        self.observers.push(observer);
    }

    /// Look up a book by identifier
    #[must_use]
    pub fn book(&self, id: &BookId) -> Option<&Book> {
        self.books.get(id)
    }

    /// Look up a member by identifier
    #[must_use]
    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.get(id)
    }

    /// Number of books in the catalog
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of registered members
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Issue a book to a member
    ///
    /// Availability and capacity are both validated before either entity is
    /// mutated; a refused transaction leaves no state change on any path.
    pub fn issue_book(&mut self, member_id: &MemberId, book_id: &BookId) -> TransactionOutcome {
        let Some(member) = self.members.get_mut(member_id) else {
            warn!(%member_id, "member not found");
            return TransactionOutcome::UnknownMember(member_id.clone());
        };
        let Some(book) = self.books.get_mut(book_id) else {
            warn!(%book_id, "book not found");
            return TransactionOutcome::UnknownBook(book_id.clone());
        };

        // Validate both preconditions before touching either entity
        if !book.is_available() {
            warn!(book = %book.title(), status = %book.status(), "book is not available");
            return TransactionOutcome::Refused(CirculationError::BookUnavailable {
                title: book.title().to_string(),
                status: book.status(),
            });
        }
        if member.at_capacity() {
            warn!(member = %member.name(), limit = member.max_limit(), "loan limit reached");
            return TransactionOutcome::Refused(CirculationError::LimitReached {
                name: member.name().to_string(),
                limit: member.max_limit(),
            });
        }

        let loan = Loan::new(book_id.clone(), book.title());
        if let Err(err) = book.mark_borrowed() {
            return TransactionOutcome::Refused(err);
        }
        if let Err(err) = member.borrow_book(loan) {
            // A refused issue must not leave the book marked borrowed
            drop(book.mark_returned());
            return TransactionOutcome::Refused(err);
        }

        info!(member = %member.name(), book = %book.title(), "book issued");
        self.notify_observers(member_id, book_id, LoanEvent::Borrowed);
        TransactionOutcome::Completed
    }

    /// Return a book previously issued to a member
    ///
    /// Membership is cross-validated before either entity is mutated, and
    /// the book transition precedes the member-side removal, so no outcome
    /// leaves the two sides inconsistent.
    pub fn return_book(&mut self, member_id: &MemberId, book_id: &BookId) -> TransactionOutcome {
        let Some(member) = self.members.get_mut(member_id) else {
            warn!(%member_id, "member not found");
            return TransactionOutcome::UnknownMember(member_id.clone());
        };
        let Some(book) = self.books.get_mut(book_id) else {
            warn!(%book_id, "book not found");
            return TransactionOutcome::UnknownBook(book_id.clone());
        };

        if !member.holds(book_id) {
            warn!(member = %member.name(), book = %book.title(), "member does not hold this book");
            return TransactionOutcome::NotHeld {
                member: member_id.clone(),
                book: book_id.clone(),
            };
        }
        if let Err(err) = book.mark_returned() {
            warn!(book = %book.title(), %err, "return refused");
            return TransactionOutcome::Refused(err);
        }
        member.return_book(book_id);

        info!(member = %member.name(), book = %book.title(), "book returned");
        self.notify_observers(member_id, book_id, LoanEvent::Returned);
        TransactionOutcome::Completed
    }

    /// Notify registered observers of a completed transaction
    fn notify_observers(&self, member_id: &MemberId, book_id: &BookId, event: LoanEvent) {
        if let (Some(member), Some(book)) = (self.members.get(member_id), self.books.get(book_id))
        {
            for observer in &self.observers {
                observer.on_transaction(member, book, event);
            }
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Library: Books: {} | Members: {}>",
            self.books.len(),
            self.members.len()
        )
    }
}
