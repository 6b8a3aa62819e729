//! ctmerge-core
//!
//! Reconciliation core shared across the ctmerge ecosystem.
//!
//! - `normalize`: field normalizers (operator, description, state, interval).
//! - `index`: flattens a log-list document into a url-keyed index.
//! - `reconcile`: per-log merge policy for one or two sources.
//! - `merge`: the collection merge, ordering, and status predicates.
//! - `source`: the `LogListSource` trait implemented by feeds.
//! - `diagnostics`: the sink for non-fatal data-quality issues.
//!
//! Everything except `source` is synchronous and performs no I/O: a merge is
//! a pure function of the two parsed documents. Retrieval is delegated to
//! `LogListSource` implementations and driven by the `ctmerge` orchestrator.
//!
#![warn(missing_docs)]

/// Sink for non-fatal data-quality issues.
pub mod diagnostics;
/// Source document indexing.
pub mod index;
/// Collection merge, ordering, and status predicates.
pub mod merge;
/// Field normalizers.
pub mod normalize;
/// Per-log reconciliation.
pub mod reconcile;
/// The data-source collaborator trait.
pub mod source;
pub mod types;

pub use diagnostics::{CollectingDiagnostics, Diagnostics, TracingDiagnostics};
pub use index::{IndexedSource, index_source};
pub use merge::{
    CURRENT_STATUSES, MergeOptions, current_logs, is_current_log, merge, resolved_status,
};
pub use normalize::{
    normalize_description, normalize_operator_name, normalize_state, normalize_temporal_interval,
};
pub use reconcile::{merge_field, reconcile_single_source, reconcile_two_sources};
pub use source::LogListSource;
pub use types::*;
