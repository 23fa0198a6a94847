use std::sync::Arc;

use crate::gemini::AnalysisProvider;
use crate::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory session state: candidate collection + active settings.
    pub store: Arc<SessionStore>,
    /// Pluggable analysis backend. Default: `GeminiClient`; handler tests
    /// swap in a stub.
    pub provider: Arc<dyn AnalysisProvider>,
}
