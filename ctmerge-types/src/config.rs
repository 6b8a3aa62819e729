//! Configuration types shared across the orchestrator and the core.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `CtMerge` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Also index each operator's `tiled_logs` (keyed by `url`, else
    /// `submission_url`). Off by default.
    pub include_tiled_logs: bool,
    /// Timeout for retrieving a single source document.
    pub fetch_timeout: Duration,
    /// Optional overall deadline for retrieving both documents.
    pub request_timeout: Option<Duration>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            include_tiled_logs: false,
            fetch_timeout: Duration::from_secs(30),
            request_timeout: None,
        }
    }
}
