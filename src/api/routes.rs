//! Request handlers for the translation API.

use axum::{
    Json,
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use log::{debug, info};
use serde_json::json;

use crate::api::AppState;
use crate::errors::AppError;
use crate::subtitle_processor::SubtitleCollection;
use crate::workspace::{OUTPUT_FILE_NAME, RequestWorkspace};

/// An upload pulled out of the multipart form
struct Upload {
    filename: String,
    bytes: Bytes,
}

/// GET /health - liveness probe
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// POST /translate - translate an uploaded SRT file
///
/// Walks the full pipeline: store the upload in a fresh workspace,
/// parse it, translate every cue in order, serialize the result and
/// return it as a downloadable attachment. The workspace is closed on
/// every exit path; either the full translated document is delivered
/// or an error is, never a partial result.
pub async fn translate_subtitle(State(state): State<AppState>, multipart: Multipart) -> Response {
    // Received: no workspace exists yet, so a missing file needs no cleanup
    let upload = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(e) => return e.into_response(),
    };

    let workspace = match RequestWorkspace::create(&state.config.server.upload_dir) {
        Ok(workspace) => workspace,
        Err(e) => return AppError::from(e).into_response(),
    };

    let result = run_pipeline(&state, &workspace, &upload).await;

    // Cleaned: runs whether the pipeline succeeded or failed partway
    workspace.close();

    match result {
        Ok(bytes) => {
            info!("Translated upload '{}' ({} bytes out)", upload.filename, bytes.len());
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/x-subrip".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", OUTPUT_FILE_NAME),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Pull the subtitle file out of the multipart form
async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .unwrap_or("subtitle.srt")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {}", e)))?;

        return Ok(Upload { filename, bytes });
    }

    Err(AppError::Validation("No file was uploaded".to_string()))
}

/// Stored -> Parsed -> Translating -> Serialized, returning the output
/// bytes to stream. Any error propagates to the caller, which still
/// owns workspace cleanup.
async fn run_pipeline(
    state: &AppState,
    workspace: &RequestWorkspace,
    upload: &Upload,
) -> Result<Vec<u8>, AppError> {
    debug!("Storing upload '{}' ({} bytes)", upload.filename, upload.bytes.len());
    workspace.store_input(&upload.bytes).await?;

    let raw = workspace.read_input().await?;
    let entries = SubtitleCollection::parse_srt_string(&raw)?;

    let translated = state.service.translate_entries(&entries).await?;

    let srt = SubtitleCollection::to_srt_string(&translated);
    workspace.store_output(&srt).await?;

    Ok(workspace.read_output().await?)
}
