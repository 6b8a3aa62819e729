//! Well-known field names of raw log entries and merged records.

/// Unique key of a log within one source document.
pub const URL: &str = "url";
/// Key of a tiled (static CT API) log when it has no `url`.
pub const SUBMISSION_URL: &str = "submission_url";
/// Log identifier (base64 SHA-256 of the log key).
pub const LOG_ID: &str = "log_id";
/// Owning operator, injected by the indexer.
pub const OPERATOR: &str = "operator";
/// Free-text log description; normalized in merged records.
pub const DESCRIPTION: &str = "description";
/// Unnormalized description text, merged alongside `description`.
pub const FULL_DESCRIPTION: &str = "full_description";
/// Raw single-entry state object, e.g. `{"usable": {"timestamp": ...}}`.
pub const STATE: &str = "state";
/// Status name extracted from `state`.
pub const STATUS: &str = "status";
/// Timestamp extracted from `state`.
pub const TIMESTAMP: &str = "timestamp";
/// Raw half-open validity window object.
pub const TEMPORAL_INTERVAL: &str = "temporal_interval";
/// Inclusive start inside `temporal_interval`.
pub const START_INCLUSIVE: &str = "start_inclusive";
/// Exclusive end inside `temporal_interval`.
pub const END_EXCLUSIVE: &str = "end_exclusive";
/// Validity window start in merged records.
pub const START: &str = "start";
/// Validity window end in merged records.
pub const END: &str = "end";
