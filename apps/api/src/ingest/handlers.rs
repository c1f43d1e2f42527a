//! Axum route handlers for resume intake.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::ingest::DocumentKind;
use crate::resume::{extract_resume, ParsedResume};
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

struct Upload {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

/// POST /api/v1/resumes/parse
///
/// Accepts a PDF or plain-text CV as multipart field `file` and returns the
/// extracted resume with its confidence score.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let upload = read_upload(&mut multipart, state.config.max_upload_bytes).await?;

    let kind = DocumentKind::detect(upload.file_name.as_deref(), upload.content_type.as_deref())
        .ok_or_else(|| {
            warn!(
                file_name = upload.file_name.as_deref().unwrap_or("<none>"),
                content_type = upload.content_type.as_deref().unwrap_or("<none>"),
                "Rejected upload with unsupported document type"
            );
            AppError::Validation(
                "Unsupported file type: upload a .pdf, .txt or .md file".to_string(),
            )
        })?;

    if upload.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    info!(?kind, bytes = upload.bytes.len(), "Parsing uploaded resume");

    let extractor = Arc::clone(&state.extractor);
    let text = tokio::task::spawn_blocking(move || extractor.extract_text(kind, &upload.bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("text extraction task failed: {e}")))??;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be recovered from the document".to_string(),
        ));
    }

    Ok(Json(parse_text(text).await?))
}

/// POST /api/v1/resumes/parse-text
///
/// Same extraction for clients that already hold the document text.
pub async fn handle_parse_text(
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(Json(parse_text(request.text).await?))
}

async fn parse_text(text: String) -> Result<ParsedResume, AppError> {
    let parsed = tokio::task::spawn_blocking(move || extract_resume(&text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("resume extraction task failed: {e}")))?;

    info!(
        experience = parsed.resume.experience.len(),
        education = parsed.resume.education.len(),
        confidence = parsed.confidence,
        "Resume extracted"
    );
    Ok(parsed)
}

async fn read_upload(multipart: &mut Multipart, limit: usize) -> Result<Upload, AppError> {
    let upload_error = |e: MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            warn!(limit, "Rejected upload over the size limit");
            AppError::PayloadTooLarge { limit }
        } else {
            AppError::Multipart(e)
        }
    };

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(upload_error)?;
        return Ok(Upload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::Validation(format!(
        "No resume file provided (expected multipart field '{UPLOAD_FIELD}')"
    )))
}
