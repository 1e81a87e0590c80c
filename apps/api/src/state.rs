use std::sync::Arc;

use crate::catalog::JobCatalogSource;
use crate::config::Config;
use crate::scoring::Scorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Scorer built once at startup; wraps the lexical or semantic skill matcher.
    pub scorer: Arc<Scorer>,
    pub catalog: Arc<dyn JobCatalogSource>,
}
