use std::sync::Arc;

use crate::enhance::enhancer::Enhancer;
use crate::storage::store::ResumeStore;

/// Shared application state injected into all route handlers via axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ResumeStore,
    /// Pluggable enhancement backend. Default: `TemplateEnhancer`; swap the
    /// construction in `main` to plug in a real model.
    pub enhancer: Arc<dyn Enhancer>,
}
