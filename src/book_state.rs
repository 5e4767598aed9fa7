use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the possible lending states of a catalog book
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum BookStatus {
    /// Book is on the shelf and eligible to be issued
    #[default]
    Available,
    /// Book is currently held by a member
    Borrowed,
    /// Book is missing from the collection; no operation drives a book
    /// here, the variant exists for records imported from elsewhere
    Lost,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Available => "Available",
            Self::Borrowed => "Borrowed",
            Self::Lost => "Lost",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::BookStatus;

    #[test]
    fn labels_match_the_status_names() {
        assert_eq!(BookStatus::Available.to_string(), "Available");
        assert_eq!(BookStatus::Borrowed.to_string(), "Borrowed");
        assert_eq!(BookStatus::Lost.to_string(), "Lost");
    }

    #[test]
    fn default_status_is_available() {
        assert_eq!(BookStatus::default(), BookStatus::Available);
    }
}
