use ctmerge_types::field;
use serde_json::Value;

/// Split a `temporal_interval` into `(start, end)`.
///
/// Both bounds are opaque timestamps; nothing is parsed or compared. An
/// absent interval, or one that is not an object, yields `(None, None)`.
#[must_use]
pub fn normalize_temporal_interval(interval: Option<&Value>) -> (Option<&Value>, Option<&Value>) {
    match interval {
        Some(Value::Object(bounds)) => (
            bounds.get(field::START_INCLUSIVE),
            bounds.get(field::END_EXCLUSIVE),
        ),
        _ => (None, None),
    }
}
