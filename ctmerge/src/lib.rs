//! ctmerge fetches two Certificate Transparency log lists and reconciles them.
//!
//! Overview
//! - Fetches Source A and Source B concurrently through `LogListSource`
//!   implementations (`ctmerge-http` for the live feeds, `ctmerge-mock` for
//!   fixtures), each under a per-source timeout.
//! - Aborts with a descriptive `CtMergeError` naming the failing source when
//!   either document is unavailable; the reconciliation core never sees a
//!   partial input.
//! - Runs the `ctmerge-core` merge: one record per log url, fields the feeds
//!   agree on stored once, disagreements stored under `<field>_<source>`,
//!   ordered by operator, description and url.
//! - Returns a `MergeReport` carrying the collection plus every data-quality
//!   issue found along the way.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use ctmerge::{CtMerge, current_logs};
//! use ctmerge_mock::MockSource;
//!
//! let merger = CtMerge::builder()
//!     .source_a(Arc::new(MockSource::apple()))
//!     .source_b(Arc::new(MockSource::google()))
//!     .build()?;
//! let report = merger.merge().await?;
//! for (url, _) in current_logs(&report.collection, merger.tags()) {
//!     println!("{url}");
//! }
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{CtMerge, CtMergeBuilder, with_request_deadline};

// Re-export the core API for convenience
pub use ctmerge_core::{
    CURRENT_STATUSES, CollectingDiagnostics, Diagnostics, LogListSource, MergeOptions,
    TracingDiagnostics, current_logs, is_current_log, resolved_status,
};
pub use ctmerge_types::{
    CtMergeError, DataIssue, FieldView, LogListDocument, LogRecord, MergeConfig, MergeReport,
    MergedCollection, Operator, RawLogEntry, SourceKey, SourceTags, field,
};
