//! Document-to-text extraction for uploaded resumes.

use bytes::Bytes;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("PDF extraction task failed: {0}")]
    Task(String),
}

/// Returns true if the upload looks like a PDF by extension, declared
/// content type, or magic bytes.
pub fn is_pdf_upload(file_name: &str, content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    file_name.to_ascii_lowercase().ends_with(".pdf")
        || ct.contains("application/pdf")
        || head.starts_with(b"%PDF-")
}

/// Concatenates page texts in order with no separator and trims the result.
/// Pages with no text contribute nothing.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref());
    }
    text.trim().to_string()
}

/// Extracts the text of every page of an in-memory PDF.
/// A document that cannot be parsed is an error; a page without
/// extractable text is not.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    let text = join_pages(&pages);
    info!(
        "Extracted {} characters from {} page(s)",
        text.chars().count(),
        pages.len()
    );
    Ok(text)
}

/// Runs `extract_resume_text` on the blocking pool. A panic inside the PDF
/// library surfaces as `ExtractError::Task`.
pub async fn extract_resume_text_blocking(bytes: Bytes) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_resume_text(&bytes))
        .await
        .map_err(|e| ExtractError::Task(e.to_string()))?
}
