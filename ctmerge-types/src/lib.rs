//! Shared data transfer objects for reconciling Certificate Transparency log lists.
#![warn(missing_docs)]

mod collection;
mod config;
mod document;
mod error;
pub mod field;
mod record;
mod reports;
mod source;

pub use collection::MergedCollection;
pub use config::MergeConfig;
pub use document::{LogListDocument, Operator, RawLogEntry};
pub use error::CtMergeError;
pub use record::{FieldView, LogRecord};
pub use reports::{DataIssue, MergeReport};
pub use source::{SourceKey, SourceTags};
