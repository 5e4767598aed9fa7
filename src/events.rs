use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lending events recorded in a book's history
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum LoanEvent {
    /// The book was borrowed by a member
    Borrowed,
    /// The book was returned to the catalog
    Returned,
}

impl fmt::Display for LoanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Borrowed => "Borrowed",
            Self::Returned => "Returned",
        };
        f.write_str(label)
    }
}

/// A timestamped entry in a book's append-only history
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HistoryEntry {
    /// The event that produced this entry
    pub event: LoanEvent,
    /// When the event occurred
    pub at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Record an event at the current time
    #[must_use]
    pub fn record(event: LoanEvent) -> Self {
        Self { event, at: Utc::now() }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.event, self.at.format("%y-%m-%d %H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::{HistoryEntry, LoanEvent};

    #[test]
    fn entries_render_the_event_and_timestamp() {
        let entry = HistoryEntry::record(LoanEvent::Borrowed);
        let rendered = entry.to_string();
        assert!(rendered.starts_with("Borrowed on "));
        // "%y-%m-%d %H:%M:%S" is 17 characters
        assert_eq!(rendered.len(), "Borrowed on ".len().saturating_add(17));
    }

    #[test]
    fn event_labels_are_the_bare_words() {
        assert_eq!(LoanEvent::Borrowed.to_string(), "Borrowed");
        assert_eq!(LoanEvent::Returned.to_string(), "Returned");
    }
}
