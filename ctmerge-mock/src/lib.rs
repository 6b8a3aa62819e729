//! Mock log-list sources for CI-safe tests and demos.
use async_trait::async_trait;
use ctmerge_core::{CtMergeError, LogListDocument, LogListSource, SourceKey};

pub mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Urls of the logs served by the fixture documents.
pub mod urls {
    pub use crate::fixtures::{
        ARGON_URL, MAMMOTH_URL, NIMBUS_URL, OAK_URL, SABRE_URL, SOFA_URL, SYCAMORE_URL, XENON_URL,
    };
}

/// Mock source serving a fixed document. Provides deterministic data from static fixtures.
#[derive(Debug, Clone)]
pub struct MockSource {
    key: SourceKey,
    document: LogListDocument,
}

impl MockSource {
    /// Serve `document` under `key`.
    #[must_use]
    pub const fn new(key: SourceKey, document: LogListDocument) -> Self {
        Self { key, document }
    }

    /// Apple-shaped fixture under [`SourceKey::APPLE`].
    #[must_use]
    pub fn apple() -> Self {
        Self::new(SourceKey::APPLE, fixtures::apple::document())
    }

    /// Google-shaped fixture under [`SourceKey::GOOGLE`].
    #[must_use]
    pub fn google() -> Self {
        Self::new(SourceKey::GOOGLE, fixtures::google::document())
    }

    /// The document this source serves.
    #[must_use]
    pub const fn document(&self) -> &LogListDocument {
        &self.document
    }
}

#[async_trait]
impl LogListSource for MockSource {
    fn key(&self) -> SourceKey {
        self.key
    }

    fn name(&self) -> &'static str {
        "ctmerge-mock"
    }

    async fn fetch(&self) -> Result<LogListDocument, CtMergeError> {
        Ok(self.document.clone())
    }
}
