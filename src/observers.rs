use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tracing::info;

use crate::{book::Book, events::LoanEvent, member::Member};

/// Trait for transaction observation
pub trait TransactionObserver {
    /// Called after a completed issue or return transaction
    fn on_transaction(&self, member: &Member, book: &Book, event: LoanEvent);
}

/// Logs every completed transaction
#[derive(Debug)]
pub struct TransactionLogger;

impl TransactionObserver for TransactionLogger {
    fn on_transaction(&self, member: &Member, book: &Book, event: LoanEvent) {
        info!(
            member = %member.name(),
            book = %book.title(),
            event = %event,
            "transaction completed"
        );
    }
}

/// Counts completed transactions; clones share the same counters
#[derive(Clone, Debug, Default)]
pub struct CirculationStats {
    /// Completed issue transactions
    issued: Arc<AtomicUsize>,
    /// Completed return transactions
    returned: Arc<AtomicUsize>,
}

impl CirculationStats {
    /// Create a fresh set of counters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of issue transactions observed so far
    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::Relaxed)
    }

    /// Number of return transactions observed so far
    #[must_use]
    pub fn returned(&self) -> usize {
        self.returned.load(Ordering::Relaxed)
    }
}

impl TransactionObserver for CirculationStats {
    fn on_transaction(&self, _member: &Member, _book: &Book, event: LoanEvent) {
        let counter = match event {
            LoanEvent::Borrowed => &self.issued,
            LoanEvent::Returned => &self.returned,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}
