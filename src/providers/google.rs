use std::time::Duration;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::ProviderConfig;
use crate::errors::GatewayError;
use crate::providers::TranslationGateway;

/// Google Cloud Translation v2 client
#[derive(Debug)]
pub struct GoogleGateway {
    /// HTTP client for API requests
    client: Client,
    /// API key, passed as a query parameter
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Source language code, empty string lets the API auto-detect
    source_language: String,
    /// Target language code
    target_language: String,
}

/// Google Translate request body
#[derive(Debug, Serialize)]
pub struct GoogleRequest {
    /// Text to translate
    pub q: String,

    /// Source language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Target language code
    pub target: String,

    /// Input format; "text" disables HTML entity handling
    pub format: String,
}

/// Google Translate response body
#[derive(Debug, Deserialize)]
pub struct GoogleResponse {
    /// Response payload wrapper
    pub data: GoogleTranslations,
}

/// Translations wrapper inside the response payload
#[derive(Debug, Deserialize)]
pub struct GoogleTranslations {
    /// One translation per input text
    pub translations: Vec<GoogleTranslation>,
}

/// Single translation result
#[derive(Debug, Deserialize)]
pub struct GoogleTranslation {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

impl GoogleGateway {
    /// Create a new Google Translate gateway from a provider configuration
    pub fn new(config: &ProviderConfig, source_language: &str, target_language: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        }
    }

    /// Build the request body for a piece of subtitle text
    pub fn build_request(&self, text: &str) -> GoogleRequest {
        GoogleRequest {
            q: text.to_string(),
            source: if self.source_language.is_empty() {
                None
            } else {
                Some(self.source_language.clone())
            },
            target: self.target_language.clone(),
            format: "text".to_string(),
        }
    }

    /// Send a translation request to the v2 endpoint
    pub async fn complete(&self, request: GoogleRequest) -> Result<GoogleResponse, GatewayError> {
        let api_url = if self.endpoint.is_empty() {
            "https://translation.googleapis.com/language/translate/v2".to_string()
        } else {
            format!(
                "{}/language/translate/v2",
                self.endpoint.trim_end_matches('/')
            )
        };

        let response = self
            .client
            .post(&api_url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Google Translate API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate API error ({}): {}", status, error_text);
            return Err(GatewayError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let google_response = response
            .json::<GoogleResponse>()
            .await
            .map_err(|e| GatewayError::ResponseParse(format!("Google Translate API: {}", e)))?;

        Ok(google_response)
    }

    /// Extract the translated text from a response
    pub fn extract_text_from_response(response: &GoogleResponse) -> Option<String> {
        response
            .data
            .translations
            .first()
            .map(|t| t.translated_text.clone())
    }
}

#[async_trait]
impl TranslationGateway for GoogleGateway {
    async fn translate(&self, text: &str) -> Result<String, GatewayError> {
        if text.trim().is_empty() {
            return Err(GatewayError::EmptyText);
        }

        let request = self.build_request(text);
        let response = self.complete(request).await?;

        Self::extract_text_from_response(&response).ok_or(GatewayError::MissingTranslation)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
