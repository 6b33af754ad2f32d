//! Application state for HTTP handlers.

use crate::application::CheckAccessUseCase;
use crate::domain::admission::RecordStore;
use crate::infrastructure::observability::HealthChecker;
use std::sync::Arc;

/// State shared by every handler.
///
/// # Type Parameters
///
/// * `S` - The record store backend
pub struct AppState<S: RecordStore> {
    /// Access check use case (validation + lookup + envelope mapping).
    pub use_case: Arc<CheckAccessUseCase<S>>,
    /// Health status, updated by the store probes.
    pub health: Arc<HealthChecker>,
}

impl<S: RecordStore> AppState<S> {
    pub fn new(use_case: CheckAccessUseCase<S>) -> Self {
        Self {
            use_case: Arc::new(use_case),
            health: Arc::new(HealthChecker::default()),
        }
    }
}

// derive(Clone) 会要求 S: Clone
impl<S: RecordStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            health: Arc::clone(&self.health),
        }
    }
}
