use ctmerge_core::{LogListDocument, Operator};
use serde_json::json;

use super::{
    ARGON_URL, MAMMOTH_URL, OAK_URL, SABRE_URL, SOFA_URL, XENON_URL, interval, log, state,
};

/// Apple's view: carries a `version` on each status and a top-level
/// `assetVersion`. Names Up In The Air by its long form.
pub fn document() -> LogListDocument {
    let mut doc = LogListDocument::new(vec![
        Operator::new(
            "Google",
            vec![
                log(ARGON_URL, "EjFVXJJJyc2ZVpLK2bp/eIzXlO6nExSqwM3hpmAIxPk=", "Google 'Argon2025h2' log")
                    .with("state", json!({"usable": {"timestamp": "2024-11-01T00:00:00Z", "version": "2"}}))
                    .with("temporal_interval", interval("2025-07-01T00:00:00Z", "2026-01-01T00:00:00Z")),
                log(XENON_URL, "3dzKNJXX4RYF55Uy+sef+D0cUN/bADoUEnYKLKy7yCo=", "Google 'Xenon2025H2' log")
                    .with("state", state("qualified", "2024-11-01T00:00:00Z"))
                    .with("temporal_interval", interval("2025-07-01T00:00:00Z", "2026-01-01T00:00:00Z")),
            ],
        ),
        Operator::new(
            "Sectigo",
            vec![
                log(SABRE_URL, "GgT/SdBUHUCv9qDDv/HYxGcvTuzuI0BomGsXQC7ciX0=", "Sectigo 'Sabre2025h2' CT log")
                    .with("state", state("usable", "2025-02-01T00:00:00Z"))
                    .with("temporal_interval", interval("2025-07-01T00:00:00Z", "2026-01-01T00:00:00Z")),
                log(MAMMOTH_URL, "rxgaKNaMo+CpikycZ6sJ+Lu8IrquvLE4o6Gd0/m2Aw0=", "Sectigo 'Mammoth2025h2'")
                    .with("state", state("retired", "2025-03-15T00:00:00Z")),
            ],
        ),
        Operator::new(
            "Up In The Air Consulting",
            vec![
                log(SOFA_URL, "sh4FzIuizYogTodm+Su5iiUgZ2va+nDnsklTLe+LkF4=", "Up In The Air 'Behind the Sofa' log")
                    .with("state", state("rejected", "2023-06-01T00:00:00Z")),
            ],
        ),
        Operator::new(
            "Let's Encrypt",
            vec![
                log(OAK_URL, "DeHyMCvTDcFAYhIJ6lUu/Ed0fLHX6TDvDkIetH5OqjQ=", "Let's Encrypt 'Oak2025h2'")
                    .with("state", state("usable", "2024-09-01T00:00:00Z"))
                    .with("temporal_interval", interval("2025-06-20T00:00:00Z", "2026-01-20T00:00:00Z")),
            ],
        ),
    ]);
    doc.extra.insert("assetVersion".into(), json!(7));
    doc
}
