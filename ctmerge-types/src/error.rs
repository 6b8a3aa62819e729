use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the ctmerge workspace.
///
/// The reconciliation core never fails; every variant here belongs to the
/// surrounding plumbing: retrieving the two log-list documents and wiring the
/// orchestrator together.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CtMergeError {
    /// A source could not be retrieved (transport failure or non-success status).
    #[error("fetching {feed} log list failed{}: {msg}", status_suffix(.status))]
    SourceFetch {
        /// Key of the source that failed (e.g. "apple").
        feed: String,
        /// HTTP-like status code, when the failure carried one.
        status: Option<u16>,
        /// Human-readable error message.
        msg: String,
    },

    /// A source answered, but the payload is not a log list.
    #[error("parsing {feed} log list failed: {msg}")]
    SourceParse {
        /// Key of the source whose payload was rejected.
        feed: String,
        /// Parser message.
        msg: String,
    },

    /// An individual source exceeded the configured fetch timeout.
    #[error("fetching {feed} log list timed out")]
    SourceTimeout {
        /// Key of the source that timed out.
        feed: String,
    },

    /// The whole fetch phase exceeded the configured request deadline.
    #[error("request timed out while fetching log lists")]
    RequestTimeout,

    /// Invalid input argument or builder misuse.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl CtMergeError {
    /// Helper: build a `SourceFetch` error carrying a status code.
    pub fn fetch_status(feed: impl Into<String>, status: u16, msg: impl Into<String>) -> Self {
        Self::SourceFetch {
            feed: feed.into(),
            status: Some(status),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceFetch` error for a failure without a status code.
    pub fn fetch(feed: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::SourceFetch {
            feed: feed.into(),
            status: None,
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceParse` error.
    pub fn parse(feed: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::SourceParse {
            feed: feed.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(feed: impl Into<String>) -> Self {
        Self::SourceTimeout { feed: feed.into() }
    }

    /// Returns true for errors raised while retrieving a source document.
    ///
    /// These abort a run before the reconciliation core is invoked.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::SourceFetch { .. }
                | Self::SourceParse { .. }
                | Self::SourceTimeout { .. }
                | Self::RequestTimeout
        )
    }

    /// Key of the source this error is attributed to, if any.
    #[must_use]
    pub fn feed(&self) -> Option<&str> {
        match self {
            Self::SourceFetch { feed, .. }
            | Self::SourceParse { feed, .. }
            | Self::SourceTimeout { feed } => Some(feed.as_str()),
            _ => None,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" with status {s}")).unwrap_or_default()
}

impl From<serde_json::Error> for CtMergeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Other(e.to_string())
    }
}
