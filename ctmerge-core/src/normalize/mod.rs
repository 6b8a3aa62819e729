//! Field normalizers.
//!
//! Pure, source-independent functions that canonicalize one field's
//! representation so equivalent values from the two feeds compare equal:
//! - `operator`: long-form operator names to their short form
//! - `description`: free-text log descriptions to a short canonical token
//! - `state`: single-entry status objects to `(status, timestamp)`
//! - `interval`: half-open validity windows to `(start, end)`
/// Free-text description canonicalization.
pub mod description;
/// Half-open validity window expansion.
pub mod interval;
/// Operator name aliases.
pub mod operator;
/// Single-entry status object expansion.
pub mod state;

pub use description::normalize_description;
pub use interval::normalize_temporal_interval;
pub use operator::normalize_operator_name;
pub use state::{ExpandedState, StateShape, normalize_state};
