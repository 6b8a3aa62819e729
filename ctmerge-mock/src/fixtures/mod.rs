pub mod apple;
pub mod google;

use ctmerge_core::RawLogEntry;
use serde_json::{Value, json};

pub const ARGON_URL: &str = "https://ct.googleapis.com/logs/us1/argon2025h2/";
pub const XENON_URL: &str = "https://ct.googleapis.com/logs/eu1/xenon2025h2/";
pub const SABRE_URL: &str = "https://sabre2025h2.ct.sectigo.com/";
pub const MAMMOTH_URL: &str = "https://mammoth2025h2.ct.sectigo.com/";
pub const SOFA_URL: &str = "https://ct.browser.360.cn/2025/";
pub const NIMBUS_URL: &str = "https://ct.cloudflare.com/logs/nimbus2025/";
pub const OAK_URL: &str = "https://oak.ct.letsencrypt.org/2025h2/";
pub const SYCAMORE_URL: &str = "https://log.sycamore.ct.letsencrypt.org/2025h2d/";

pub fn state(status: &str, timestamp: &str) -> Value {
    let mut state = serde_json::Map::new();
    state.insert(status.to_string(), json!({ "timestamp": timestamp }));
    Value::Object(state)
}

pub fn interval(start: &str, end: &str) -> Value {
    json!({ "start_inclusive": start, "end_exclusive": end })
}

pub fn log(url: &str, log_id: &str, description: &str) -> RawLogEntry {
    RawLogEntry::new()
        .with("url", url)
        .with("log_id", log_id)
        .with("description", description)
        .with("mmd", 86400)
}
