use ctmerge_core::{LogListDocument, Operator, RawLogEntry};
use serde_json::json;

use super::{
    ARGON_URL, NIMBUS_URL, OAK_URL, SABRE_URL, SOFA_URL, SYCAMORE_URL, XENON_URL, interval, log,
    state,
};

/// Google's view: short operator name for Up In The Air, an extra Cloudflare
/// log, a malformed two-entry `state`, and one tiled log.
pub fn document() -> LogListDocument {
    let mut lets_encrypt = Operator::new(
        "Let's Encrypt",
        vec![
            log(OAK_URL, "DeHyMCvTDcFAYhIJ6lUu/Ed0fLHX6TDvDkIetH5OqjQ=", "Let's Encrypt 'Oak2025h2' log")
                .with("state", state("usable", "2024-09-01T00:00:00Z"))
                .with("temporal_interval", interval("2025-06-20T00:00:00Z", "2026-01-20T00:00:00Z")),
        ],
    );
    lets_encrypt.tiled_logs.push(
        RawLogEntry::new()
            .with("submission_url", SYCAMORE_URL)
            .with("monitoring_url", "https://mon.sycamore.ct.letsencrypt.org/2025h2d/")
            .with("log_id", "bP5QGUOoXqkWvFOLKBtOdMkNbbFIdR4ZqqbN6Oo4JiU=")
            .with("description", "Let's Encrypt 'Sycamore2025h2d'")
            .with("state", state("qualified", "2025-04-01T00:00:00Z")),
    );

    LogListDocument::new(vec![
        Operator::new(
            "Google",
            vec![
                log(ARGON_URL, "EjFVXJJJyc2ZVpLK2bp/eIzXlO6nExSqwM3hpmAIxPk=", "Google 'Argon2025h2' log")
                    .with("state", state("usable", "2024-11-01T00:00:00Z"))
                    .with("temporal_interval", interval("2025-07-01T00:00:00Z", "2026-01-01T00:00:00Z")),
                log(XENON_URL, "3dzKNJXX4RYF55Uy+sef+D0cUN/bADoUEnYKLKy7yCo=", "Google 'Xenon2025h2' log")
                    .with("state", state("usable", "2024-11-01T00:00:00Z"))
                    .with("temporal_interval", interval("2025-07-01T00:00:00Z", "2026-01-01T00:00:00Z")),
            ],
        ),
        Operator::new(
            "Sectigo",
            vec![
                log(SABRE_URL, "GgT/SdBUHUCv9qDDv/HYxGcvTuzuI0BomGsXQC7ciX0=", "Sectigo 'Sabre2025h2' CT log")
                    .with("state", json!({
                        "usable": {"timestamp": "2025-02-01T00:00:00Z"},
                        "qualified": {"timestamp": "2024-12-01T00:00:00Z"},
                    }))
                    .with("temporal_interval", interval("2025-07-01T00:00:00Z", "2026-01-01T00:00:00Z")),
            ],
        ),
        Operator::new(
            "Up In The Air",
            vec![
                log(SOFA_URL, "sh4FzIuizYogTodm+Su5iiUgZ2va+nDnsklTLe+LkF4=", "Up In The Air 'Behind the Sofa' log")
                    .with("state", state("rejected", "2023-06-01T00:00:00Z")),
            ],
        ),
        Operator::new(
            "Cloudflare",
            vec![
                log(NIMBUS_URL, "zPsPaoVxCWX+lZtTzumyfCLphVwNl422qX5UwP5MDbA=", "Cloudflare 'Nimbus2025'")
                    .with("state", state("usable", "2023-12-01T00:00:00Z"))
                    .with("temporal_interval", interval("2025-01-01T00:00:00Z", "2026-01-01T00:00:00Z")),
            ],
        ),
        lets_encrypt,
    ])
}
