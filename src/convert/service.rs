//! Upload conversion orchestration.

use crate::scratch::ScratchStore;

use super::backend::MarkdownConverter;
use super::types::{Conversion, ConvertError};

/// Convert an uploaded PDF to Markdown.
///
/// The upload is spooled to a scratch file, handed to the selected backend,
/// and the scratch file is removed no matter how the conversion ends. The
/// filename is validated before anything touches disk.
pub fn convert_upload(
    converter: &dyn MarkdownConverter,
    scratch: &ScratchStore,
    filename: &str,
    bytes: &[u8],
) -> Result<Conversion, ConvertError> {
    if !is_pdf_filename(filename) {
        return Err(ConvertError::UnsupportedFile(filename.to_string()));
    }

    let mut spooled = scratch.acquire(bytes, ".pdf")?;
    let result = converter.convert(spooled.path());
    spooled.release();

    let markdown = result?;
    Ok(Conversion {
        markdown,
        filename: output_filename(filename),
    })
}

/// Case-insensitive check for the `.pdf` extension.
fn is_pdf_filename(filename: &str) -> bool {
    filename.to_ascii_lowercase().ends_with(".pdf")
}

/// Swap the trailing `.pdf` for `.md`.
///
/// The extension is stripped case-insensitively, so `Report.PDF` becomes
/// `Report.md`. Callers must have validated the name with
/// [`is_pdf_filename`] first.
fn output_filename(filename: &str) -> String {
    let stem = &filename[..filename.len() - ".pdf".len()];
    format!("{stem}.md")
}
