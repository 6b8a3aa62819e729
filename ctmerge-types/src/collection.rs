//! The ordered output of a merge run.

use serde::{Deserialize, Serialize};

use crate::record::LogRecord;

/// Ordered sequence of `(url, record)` pairs.
///
/// Built once per merge run, sorted by operator, then description, then url.
/// The order is part of the contract; consumers must preserve it. Serializes
/// as a JSON array of `[url, record]` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergedCollection {
    entries: Vec<(String, LogRecord)>,
}

impl MergedCollection {
    /// Wrap entries that are already in display order.
    #[must_use]
    pub const fn from_ordered(entries: Vec<(String, LogRecord)>) -> Self {
        Self { entries }
    }

    /// Number of logs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no logs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(url, record)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LogRecord)> {
        self.entries.iter().map(|(url, rec)| (url.as_str(), rec))
    }

    /// Urls in order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(url, _)| url.as_str())
    }

    /// Find the record for a log url.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&LogRecord> {
        self.entries
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, rec)| rec)
    }

    /// Borrow the ordered entries.
    #[must_use]
    pub fn as_slice(&self) -> &[(String, LogRecord)] {
        &self.entries
    }

    /// Consume into the ordered entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<(String, LogRecord)> {
        self.entries
    }
}

impl IntoIterator for MergedCollection {
    type Item = (String, LogRecord);
    type IntoIter = std::vec::IntoIter<(String, LogRecord)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
