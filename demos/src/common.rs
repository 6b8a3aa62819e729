use std::sync::Arc;

use ctmerge::{CtMerge, CtMergeError, LogListSource};
use ctmerge_http::HttpLogListSource;
use ctmerge_mock::MockSource;
use serde_json::Value;

/// Return the Apple and Google sources for demos.
///
/// Uses the fixture sources when `CTMERGE_DEMOS_USE_MOCK` is set, the live
/// feeds otherwise.
///
/// # Errors
/// Returns an error if the HTTP client for the live feeds cannot be built.
pub fn get_sources() -> Result<(Arc<dyn LogListSource>, Arc<dyn LogListSource>), CtMergeError> {
    if std::env::var("CTMERGE_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Sources for CI) ---");
        Ok((Arc::new(MockSource::apple()), Arc::new(MockSource::google())))
    } else {
        Ok((
            Arc::new(HttpLogListSource::apple()?),
            Arc::new(HttpLogListSource::google()?),
        ))
    }
}

/// A merger over [`get_sources`] with default configuration.
///
/// # Errors
/// Propagates source construction and builder validation errors.
pub fn default_merger() -> Result<CtMerge, CtMergeError> {
    let (apple, google) = get_sources()?;
    CtMerge::builder().source_a(apple).source_b(google).build()
}

/// Render a field value for a table cell.
#[must_use]
pub fn cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}
