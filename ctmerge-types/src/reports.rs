//! Report envelopes and data-quality signals produced during a merge.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collection::MergedCollection;

/// A non-fatal data-quality problem found in a source document.
///
/// None of these abort a merge; the affected log still yields a best-effort
/// record (or, for [`DataIssue::MissingUrl`], is skipped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DataIssue {
    /// A `state` object did not have exactly one entry; the entry with the
    /// lowest status name (if any) was used.
    StateShape {
        /// Source the log came from.
        feed: String,
        /// Log url, when known.
        url: Option<String>,
        /// Number of entries actually present.
        entries: usize,
    },
    /// A `state` field was present but not an object.
    StateNotObject {
        /// Source the log came from.
        feed: String,
        /// Log url, when known.
        url: Option<String>,
    },
    /// A log entry had no usable key and was left out of the index.
    MissingUrl {
        /// Source the log came from.
        feed: String,
        /// Operator owning the entry.
        operator: String,
    },
}

impl DataIssue {
    /// Source the issue was found in.
    #[must_use]
    pub fn feed(&self) -> &str {
        match self {
            Self::StateShape { feed, .. }
            | Self::StateNotObject { feed, .. }
            | Self::MissingUrl { feed, .. } => feed,
        }
    }
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateShape { feed, url, entries } => write!(
                f,
                "{feed}: state of {} has {entries} entries, expected exactly one",
                url.as_deref().unwrap_or("<unknown log>")
            ),
            Self::StateNotObject { feed, url } => write!(
                f,
                "{feed}: state of {} is not an object",
                url.as_deref().unwrap_or("<unknown log>")
            ),
            Self::MissingUrl { feed, operator } => {
                write!(f, "{feed}: log of operator {operator:?} has no url")
            }
        }
    }
}

/// Summary of one merge run.
///
/// Carries the ordered [`MergedCollection`] and every [`DataIssue`] reported
/// while building it, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MergeReport {
    /// Reconciled logs in display order.
    pub collection: MergedCollection,
    /// Non-fatal issues encountered while merging.
    pub issues: Vec<DataIssue>,
}
