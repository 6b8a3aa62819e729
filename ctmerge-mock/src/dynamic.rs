use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use ctmerge_core::{CtMergeError, LogListDocument, LogListSource, SourceKey};

/// Instruction for how the next fetches should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(CtMergeError),
    /// Hang indefinitely (simulate a stalled feed).
    Hang,
}

#[derive(Default)]
struct InternalState {
    behavior: Option<MockBehavior<LogListDocument>>,
    fetches: usize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for subsequent `fetch` calls.
    pub async fn set_behavior(&self, behavior: MockBehavior<LogListDocument>) {
        let mut guard = self.state.lock().await;
        guard.behavior = Some(behavior);
    }

    /// Number of `fetch` calls seen so far, including ones that failed or hung.
    pub async fn fetch_count(&self) -> usize {
        self.state.lock().await.fetches
    }

    /// Clear the configured behavior and the call counter.
    pub async fn clear(&self) {
        let mut guard = self.state.lock().await;
        guard.behavior = None;
        guard.fetches = 0;
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    key: SourceKey,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(key: SourceKey) -> (Arc<dyn LogListSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { key, state });
        (me as Arc<dyn LogListSource>, controller)
    }
}

#[async_trait]
impl LogListSource for DynamicMockSource {
    fn key(&self) -> SourceKey {
        self.key
    }

    fn name(&self) -> &'static str {
        "ctmerge-mock-dynamic"
    }

    async fn fetch(&self) -> Result<LogListDocument, CtMergeError> {
        // Snapshot the behavior without holding the lock across the hang
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.fetches += 1;
            guard.behavior.clone()
        };

        match behavior {
            Some(MockBehavior::Return(doc)) => Ok(doc),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(CtMergeError::fetch(
                self.key.as_str(),
                "no behavior configured",
            )),
        }
    }
}
