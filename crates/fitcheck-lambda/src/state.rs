use std::sync::Arc;

use fitcheck_standards::Standards;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub standards: Arc<Standards>,
}
