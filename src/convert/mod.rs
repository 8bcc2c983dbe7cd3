//! PDF to Markdown conversion.
//!
//! The backend is picked once at startup: pdfium when the native library can
//! be bound, otherwise the pure-Rust per-page extractor. `convert_upload` is
//! the single entry point used by the HTTP layer.

mod backend;
mod service;
mod types;

pub use backend::{select_converter, MarkdownConverter, PageTextConverter, PdfiumConverter};
pub use service::convert_upload;
pub use types::{BackendKind, Conversion, ConvertError};
