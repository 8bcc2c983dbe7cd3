//! Conversion backends.
//!
//! Two ways to turn a PDF on disk into Markdown text:
//!
//! - [`PdfiumConverter`] reads the text layer through the native pdfium
//!   library. The library is bound once at process start; when no copy can
//!   be found the server runs without it.
//! - [`PageTextConverter`] is the pure-Rust fallback: `pdf-extract` pulls
//!   each page's text and every page is emitted under a `## Page N` heading.
//!
//! [`select_converter`] makes the choice once; the selected backend is
//! shared read-only for the life of the process.

use std::fmt::Write as _;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use pdfium_render::prelude::*;

use super::types::{BackendKind, ConvertError};
use crate::config::ConversionConfig;

/// A conversion backend.
///
/// Implementations are blocking and synchronous; the HTTP layer is
/// responsible for running them off the async workers.
pub trait MarkdownConverter: Send + Sync {
    /// Which backend this is.
    fn kind(&self) -> BackendKind;

    /// Convert the PDF at `path` to Markdown text.
    fn convert(&self, path: &Path) -> Result<String, ConvertError>;
}

/// Probe pdfium and pick the backend for this process.
pub fn select_converter(config: &ConversionConfig) -> Arc<dyn MarkdownConverter> {
    match PdfiumConverter::probe(config.pdfium_lib_dir.as_deref()) {
        Ok(converter) => {
            tracing::info!("using pdfium text extraction");
            Arc::new(converter)
        }
        Err(err) => {
            tracing::warn!(
                "pdfium is not available ({err}); falling back to built-in page text extraction"
            );
            Arc::new(PageTextConverter)
        }
    }
}

/// Primary backend: pdfium text layer extraction.
pub struct PdfiumConverter {
    pdfium: Pdfium,
}

// SAFETY: the thread_safe feature serializes all pdfium FFI calls behind an
// internal lock, so the instance can be shared across blocking workers.
unsafe impl Send for PdfiumConverter {}
unsafe impl Sync for PdfiumConverter {}

impl PdfiumConverter {
    /// Bind the pdfium shared library.
    ///
    /// Tries `lib_dir` when configured, otherwise the working directory and
    /// then the system library path. Fails when no copy of pdfium can be
    /// found, in which case the caller selects the fallback backend.
    pub fn probe(lib_dir: Option<&Path>) -> Result<Self, ConvertError> {
        let bindings = match lib_dir {
            Some(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            }
            None => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library()),
        }
        .map_err(|e| ConvertError::BackendUnavailable(e.to_string()))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl MarkdownConverter for PdfiumConverter {
    fn kind(&self) -> BackendKind {
        BackendKind::Pdfium
    }

    /// Only the static text layer is read; embedded JavaScript and form
    /// actions are never executed.
    fn convert(&self, path: &Path) -> Result<String, ConvertError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ConvertError::Extraction(e.to_string()))?;

        let mut pages = Vec::new();
        for page in document.pages().iter() {
            let text = page
                .text()
                .map_err(|e| ConvertError::Extraction(e.to_string()))?
                .all();
            pages.push(text);
        }

        Ok(pages.join("\n\n"))
    }
}

/// Fallback backend: pure-Rust per-page extraction via pdf-extract.
pub struct PageTextConverter;

impl MarkdownConverter for PageTextConverter {
    fn kind(&self) -> BackendKind {
        BackendKind::PageText
    }

    fn convert(&self, path: &Path) -> Result<String, ConvertError> {
        let pages = extract_pages(path)?;
        Ok(pages_to_markdown(&pages))
    }
}

/// Extract one string per page. `pdf_extract` can panic on malformed input
/// rather than returning an error, so the call is wrapped in `catch_unwind`.
fn extract_pages(path: &Path) -> Result<Vec<String>, ConvertError> {
    let outcome =
        panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_by_pages(path)));
    match outcome {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(err)) => Err(ConvertError::Extraction(err.to_string())),
        Err(_) => Err(ConvertError::Extraction(
            "extraction panicked (malformed document)".into(),
        )),
    }
}

/// Render extracted pages as Markdown: a `## Page N` heading per page,
/// 1-indexed in physical order, followed by a blank line and that page's raw
/// text, with page blocks joined by blank lines.
fn pages_to_markdown(pages: &[String]) -> String {
    let mut out = String::new();
    for (idx, text) in pages.iter().enumerate() {
        if idx > 0 {
            out.push_str("\n\n");
        }
        let _ = write!(out, "## Page {}\n\n{text}", idx + 1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_pages_get_numbered_headings_in_order() {
        let pages = vec!["first".to_string(), "second".to_string(), "third".to_string()];
        assert_eq!(
            pages_to_markdown(&pages),
            "## Page 1\n\nfirst\n\n## Page 2\n\nsecond\n\n## Page 3\n\nthird"
        );
    }

    #[test]
    fn single_page_markdown() {
        let pages = vec!["Hello World".to_string()];
        assert_eq!(pages_to_markdown(&pages), "## Page 1\n\nHello World");
    }

    #[test]
    fn empty_pages_are_still_numbered() {
        let pages = vec![String::new(), "text".to_string()];
        assert_eq!(pages_to_markdown(&pages), "## Page 1\n\n\n\n## Page 2\n\ntext");
    }

    #[test]
    fn no_pages_renders_empty() {
        assert_eq!(pages_to_markdown(&[]), "");
    }

    #[test]
    fn garbage_bytes_fail_extraction() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        std::io::Write::write_all(file.as_file_mut(), b"not a pdf at all").unwrap();

        let err = PageTextConverter.convert(file.path()).unwrap_err();
        assert!(matches!(err, ConvertError::Extraction(_)));
    }
}
