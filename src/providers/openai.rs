use std::time::Duration;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::ProviderConfig;
use crate::errors::GatewayError;
use crate::providers::TranslationGateway;

/// OpenAI client for the completions API
#[derive(Debug)]
pub struct OpenAIGateway {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Model used for completions
    model: String,
    /// Completion token cap
    max_tokens: u32,
    /// Source language code
    source_language: String,
    /// Target language code
    target_language: String,
}

/// OpenAI completion request
#[derive(Debug, Serialize)]
pub struct OpenAIRequest {
    /// The model to use
    pub model: String,

    /// The completion prompt
    pub prompt: String,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

/// OpenAI completion response
#[derive(Debug, Deserialize)]
pub struct OpenAIResponse {
    /// Completion choices, first one carries the translation
    pub choices: Vec<OpenAIChoice>,
}

/// Individual completion choice
#[derive(Debug, Deserialize)]
pub struct OpenAIChoice {
    /// The generated text
    pub text: String,
}

impl OpenAIGateway {
    /// Create a new OpenAI gateway from a provider configuration
    pub fn new(config: &ProviderConfig, source_language: &str, target_language: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        }
    }

    /// Build the translation prompt for a piece of subtitle text
    pub fn build_prompt(&self, text: &str) -> String {
        format!(
            "Translate the following {} text to {}:\n\n\"{}\"\n\nTranslation:",
            self.source_language, self.target_language, text
        )
    }

    /// Complete a request against the completions endpoint
    pub async fn complete(&self, request: OpenAIRequest) -> Result<OpenAIResponse, GatewayError> {
        let api_url = if self.endpoint.is_empty() {
            "https://api.openai.com/v1/completions".to_string()
        } else {
            format!("{}/completions", self.endpoint.trim_end_matches('/'))
        };

        let response = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("OpenAI API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(GatewayError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let openai_response = response
            .json::<OpenAIResponse>()
            .await
            .map_err(|e| GatewayError::ResponseParse(format!("OpenAI API: {}", e)))?;

        Ok(openai_response)
    }

    /// Extract the translated text from a completion response
    pub fn extract_text_from_response(response: &OpenAIResponse) -> Option<String> {
        response
            .choices
            .first()
            .map(|choice| choice.text.trim().to_string())
    }
}

#[async_trait]
impl TranslationGateway for OpenAIGateway {
    async fn translate(&self, text: &str) -> Result<String, GatewayError> {
        if text.trim().is_empty() {
            return Err(GatewayError::EmptyText);
        }

        let request = OpenAIRequest {
            model: self.model.clone(),
            prompt: self.build_prompt(text),
            max_tokens: self.max_tokens,
        };

        let response = self.complete(request).await?;

        Self::extract_text_from_response(&response).ok_or(GatewayError::MissingTranslation)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
