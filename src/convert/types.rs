//! Conversion types and errors.

use thiserror::Error;

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Extracted Markdown text.
    pub markdown: String,
    /// Suggested name for the converted document (`.pdf` swapped for `.md`).
    pub filename: String,
}

/// Which extraction backend was selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Native pdfium text layer extraction.
    Pdfium,
    /// Pure-Rust per-page extraction via pdf-extract.
    PageText,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Pdfium => "pdfium",
            BackendKind::PageText => "page-text",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion errors.
///
/// The route layer maps these onto HTTP statuses: caller mistakes
/// ([`ConvertError::is_client_error`]) become 400s, everything else a 500.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The uploaded filename does not end in `.pdf`. Carries the offending
    /// name for logs; the message is the one clients see.
    #[error("Only PDF files are supported")]
    UnsupportedFile(String),

    /// The multipart body carried no `file` field.
    #[error("Missing multipart field 'file'")]
    MissingFile,

    /// The multipart body could not be read.
    #[error("Failed to read upload: {0}")]
    Upload(String),

    /// The selected backend could not produce text.
    #[error("Failed to convert PDF: {0}")]
    Extraction(String),

    /// Filesystem fault while spooling the upload.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else that went wrong during orchestration.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The pdfium library could not be bound at startup. Never surfaces
    /// through HTTP; selection falls back to the page-text backend instead.
    #[error("pdfium unavailable: {0}")]
    BackendUnavailable(String),
}

impl ConvertError {
    /// Whether this error is the caller's fault (HTTP 400) rather than a
    /// conversion failure (HTTP 500).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ConvertError::UnsupportedFile(_) | ConvertError::MissingFile | ConvertError::Upload(_)
        )
    }
}
