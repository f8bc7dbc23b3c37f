//! PDF text extraction
//!
//! Thin wrapper over the `pdf-extract` crate. The extractor yields the
//! document text with pages joined by newlines; everything downstream
//! treats the result as one raw string.

use anyhow::{Context, Result};
use std::path::Path;

/// Extract the text layer of a PDF file.
///
/// Form feeds emitted between pages are normalized to newlines so the
/// result is the per-page text joined by newline separators. Pages
/// without an extractable text layer contribute nothing.
pub fn extract_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read PDF file: {}", path.display()))?;

    let text = pdf_extract::extract_text_from_mem(&bytes)
        .with_context(|| format!("Failed to extract text from PDF: {}", path.display()))?;

    Ok(join_pages(&text))
}

/// Normalize page breaks to newline separators
fn join_pages(text: &str) -> String {
    let joined = text.replace('\u{0C}', "\n");
    // Strip stray NULs and BOMs some producers leave in the text layer
    joined.replace('\u{0}', "").replace('\u{FEFF}', "")
}
