//! Re-export of the shared data types from `ctmerge-types`.
// Consolidated re-exports so downstream crates can depend on `ctmerge-core` only

pub use ctmerge_types::field;
pub use ctmerge_types::{
    CtMergeError, DataIssue, FieldView, LogListDocument, LogRecord, MergeConfig, MergeReport,
    MergedCollection, Operator, RawLogEntry, SourceKey, SourceTags,
};
