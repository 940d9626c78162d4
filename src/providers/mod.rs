/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for the supported
 * translation providers:
 * - OpenAI: completion-based translation
 * - Google: Google Cloud Translation v2
 * - Mock: in-process gateway for tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

use anyhow::{Result, anyhow};

use crate::app_config::{Config, TranslationProvider};
use crate::errors::GatewayError;

/// Common trait for all translation gateways
///
/// A gateway wraps exactly one remote call per invocation: no retries,
/// no batching. Implementations are selected by configuration and used
/// interchangeably by the translation service.
#[async_trait]
pub trait TranslationGateway: Send + Sync + Debug {
    /// Translate a single piece of text.
    ///
    /// # Arguments
    /// * `text` - Source text, must be non-empty
    ///
    /// # Returns
    /// * `Result<String, GatewayError>` - The translated text or an error.
    ///   Provider-side truncation of long output is passed through as-is.
    async fn translate(&self, text: &str) -> Result<String, GatewayError>;

    /// Human-readable gateway name for logging
    fn name(&self) -> &'static str;
}

pub mod google;
pub mod mock;
pub mod openai;

/// Build the gateway selected by the configuration.
///
/// The active provider entry supplies the credential, endpoint and
/// request tuning; the config's language pair is baked into the gateway
/// so the pipeline only ever hands it raw text.
pub fn create_gateway(config: &Config) -> Result<Arc<dyn TranslationGateway>> {
    let provider_config = config
        .translation
        .get_active_provider_config()
        .ok_or_else(|| {
            anyhow!(
                "No configuration found for provider '{}'",
                config.translation.provider
            )
        })?;

    let gateway: Arc<dyn TranslationGateway> = match config.translation.provider {
        TranslationProvider::OpenAI => Arc::new(openai::OpenAIGateway::new(
            provider_config,
            &config.source_language,
            &config.target_language,
        )),
        TranslationProvider::Google => Arc::new(google::GoogleGateway::new(
            provider_config,
            &config.source_language,
            &config.target_language,
        )),
    };

    Ok(gateway)
}
