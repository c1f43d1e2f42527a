//! Text recovery from uploaded documents.

use thiserror::Error;

use crate::ingest::DocumentKind;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Turns raw upload bytes into text. Implementations are blocking and must be
/// called from `spawn_blocking`.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// PDF via `pdf-extract`, plain text as UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentTextExtractor;

impl TextExtractor for DocumentTextExtractor {
    fn extract_text(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
        match kind {
            DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| ExtractError::Pdf(e.to_string())),
            DocumentKind::PlainText => {
                let text = String::from_utf8(bytes.to_vec())?;
                Ok(text.trim_start_matches('\u{feff}').to_string())
            }
        }
    }
}
