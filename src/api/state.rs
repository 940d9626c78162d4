//! Application state for the HTTP server

use crate::app_config::Config;
use crate::translation_service::TranslationService;
use std::sync::Arc;

/// Shared application state accessible to all route handlers
///
/// Cloned for each request (cheap Arc clones); holds the translation
/// service bound to the configured gateway and the configuration.
#[derive(Clone)]
pub struct AppState {
    /// Translation service driving the configured gateway
    pub service: TranslationService,

    /// Configuration (read access only)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service: TranslationService, config: Arc<Config>) -> Self {
        Self { service, config }
    }
}
