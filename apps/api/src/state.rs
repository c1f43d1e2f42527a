use std::sync::Arc;

use crate::config::Config;
use crate::ingest::extractor::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document-to-text backend. Default: DocumentTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
