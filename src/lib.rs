//! In-memory library circulation system: a book catalog, a member register,
//! and the issue/return transactions that coordinate them.
//!
//! The [`Library`] owns every [`Book`] and [`Member`] and is the sole
//! mutator of both. Entity-level failures are caught at its transaction
//! boundary and reported as [`TransactionOutcome`] values; nothing
//! propagates past it and nothing is fatal to the process.

pub mod book;
pub mod book_state;
pub mod error;
pub mod events;
pub mod ids;
pub mod library;
pub mod member;
pub mod observers;

pub use book::Book;
pub use book_state::BookStatus;
pub use error::CirculationError;
pub use events::{HistoryEntry, LoanEvent};
pub use ids::{BookId, MemberId};
pub use library::{Library, TransactionOutcome};
pub use member::{Loan, Member};
pub use observers::{CirculationStats, TransactionLogger, TransactionObserver};
