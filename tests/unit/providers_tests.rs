/*!
 * Tests for provider implementations and gateway selection
 */

use srtserve::app_config::{Config, ProviderConfig, TranslationProvider};
use srtserve::errors::GatewayError;
use srtserve::providers::google::GoogleGateway;
use srtserve::providers::mock::{MockGateway, MockMode};
use srtserve::providers::openai::{OpenAIGateway, OpenAIResponse};
use srtserve::providers::{TranslationGateway, create_gateway};

fn openai_gateway() -> OpenAIGateway {
    let mut config = ProviderConfig::new(TranslationProvider::OpenAI);
    config.api_key = "test-key".to_string();
    OpenAIGateway::new(&config, "en", "fr")
}

fn google_gateway() -> GoogleGateway {
    let mut config = ProviderConfig::new(TranslationProvider::Google);
    config.api_key = "test-key".to_string();
    GoogleGateway::new(&config, "en", "fr")
}

/// Test OpenAI prompt construction carries languages and the text
#[test]
fn test_openai_build_prompt_withText_shouldContainLanguagesAndText() {
    let gateway = openai_gateway();
    let prompt = gateway.build_prompt("Hello there");

    assert!(prompt.contains("en"));
    assert!(prompt.contains("fr"));
    assert!(prompt.contains("\"Hello there\""));
    assert!(prompt.ends_with("Translation:"));
}

/// Test OpenAI response extraction takes the first choice, trimmed
#[test]
fn test_openai_extract_text_withChoices_shouldReturnFirstTrimmed() {
    let response: OpenAIResponse =
        serde_json::from_str(r#"{"choices":[{"text":"\n Bonjour \n"},{"text":"ignored"}]}"#)
            .unwrap();

    let text = OpenAIGateway::extract_text_from_response(&response);
    assert_eq!(text, Some("Bonjour".to_string()));
}

/// Test OpenAI response extraction with no choices yields nothing
#[test]
fn test_openai_extract_text_withNoChoices_shouldReturnNone() {
    let response: OpenAIResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
    assert_eq!(OpenAIGateway::extract_text_from_response(&response), None);
}

/// Test Google request construction maps the language pair
#[test]
fn test_google_build_request_withText_shouldSetLanguagesAndFormat() {
    let gateway = google_gateway();
    let request = gateway.build_request("Hello");

    assert_eq!(request.q, "Hello");
    assert_eq!(request.source.as_deref(), Some("en"));
    assert_eq!(request.target, "fr");
    assert_eq!(request.format, "text");

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["q"], "Hello");
    assert_eq!(body["target"], "fr");
}

/// Test Google response deserialization and extraction
#[test]
fn test_google_extract_text_withResponse_shouldReturnTranslation() {
    let json = r#"{"data":{"translations":[{"translatedText":"Bonjour"}]}}"#;
    let response = serde_json::from_str(json).unwrap();

    let text = GoogleGateway::extract_text_from_response(&response);
    assert_eq!(text, Some("Bonjour".to_string()));
}

/// Empty text is rejected before any remote call
#[tokio::test]
async fn test_gateway_translate_withEmptyText_shouldFailWithoutCall() {
    let gateway = MockGateway::new(MockMode::Echo);

    let result = gateway.translate("   ").await;

    assert!(matches!(result, Err(GatewayError::EmptyText)));
    assert_eq!(gateway.call_count(), 0);
}

/// The mock passes text through untouched in echo mode
#[tokio::test]
async fn test_mock_gateway_withEchoMode_shouldReturnInput() {
    let gateway = MockGateway::new(MockMode::Echo);
    let result = gateway.translate("as-is").await.unwrap();
    assert_eq!(result, "as-is");
}

/// Gateway selection follows the configured provider
#[test]
fn test_create_gateway_withConfiguredProvider_shouldSelectMatchingAdapter() {
    let mut config = Config::default();
    for provider in &mut config.translation.available_providers {
        provider.api_key = "test-key".to_string();
    }

    config.translation.provider = TranslationProvider::OpenAI;
    let gateway = create_gateway(&config).unwrap();
    assert_eq!(gateway.name(), "openai");

    config.translation.provider = TranslationProvider::Google;
    let gateway = create_gateway(&config).unwrap();
    assert_eq!(gateway.name(), "google");
}
