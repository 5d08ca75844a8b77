use std::sync::Arc;

use crate::config::Config;
use crate::scoring::engine::AtsEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable once built; shared by every request without locking.
    pub engine: Arc<AtsEngine>,
    pub config: Config,
}
