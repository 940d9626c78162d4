/*!
 * # srtserve
 *
 * An HTTP service that translates SRT subtitle files through external
 * translation providers.
 *
 * ## Features
 *
 * - Parse and re-emit SRT subtitle documents with timing preserved
 * - Translate subtitle text using swappable providers:
 *   - OpenAI completions API
 *   - Google Translate API
 * - Single-endpoint upload/download flow with guaranteed cleanup of
 *   per-request temporary files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: SRT parsing and serialization
 * - `translation_service`: Sequential per-cue translation orchestration
 * - `providers`: Client implementations for translation providers:
 *   - `providers::openai`: OpenAI completions client
 *   - `providers::google`: Google Translate v2 client
 *   - `providers::mock`: In-process gateway for tests
 * - `workspace`: Per-request temporary file workspace
 * - `api`: HTTP surface (upload endpoint, health check, static UI)
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod api;
pub mod app_config;
pub mod errors;
pub mod providers;
pub mod subtitle_processor;
pub mod translation_service;
pub mod workspace;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, GatewayError, SubtitleError};
pub use providers::{TranslationGateway, create_gateway};
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
pub use translation_service::TranslationService;
pub use workspace::RequestWorkspace;
