// Upload ingestion: recognise the document kind, recover its text, hand the
// text to the resume extractor.

pub mod extractor;
pub mod handlers;

/// Document formats the intake endpoint can recover text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Picks a kind from the upload's file name, falling back to its content type.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Option<Self> {
        let by_extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .and_then(|(_, ext)| match ext.to_ascii_lowercase().as_str() {
                "pdf" => Some(DocumentKind::Pdf),
                "txt" | "md" | "text" => Some(DocumentKind::PlainText),
                _ => None,
            });

        by_extension.or_else(|| {
            let mime = content_type?.split(';').next()?.trim().to_ascii_lowercase();
            match mime.as_str() {
                "application/pdf" => Some(DocumentKind::Pdf),
                "text/plain" | "text/markdown" => Some(DocumentKind::PlainText),
                _ => None,
            }
        })
    }
}
