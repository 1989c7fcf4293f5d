//! Analysis pipeline.
//!
//! Flow: validate inputs → extract resume text → build prompt →
//!       model call → normalize reply.
//!
//! Validation failures return before any model call is made.

use bytes::Bytes;
use tracing::info;

use crate::analysis::extractor::{extract_resume_text_blocking, is_pdf_upload};
use crate::analysis::models::AnalysisOutcome;
use crate::analysis::normalizer::normalize_reply;
use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

pub const MISSING_INPUT_MESSAGE: &str =
    "Please upload your resume and enter a job description to proceed with the analysis.";
pub const NOT_PDF_MESSAGE: &str = "Please upload your resume as a PDF file.";

/// An uploaded resume file.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Inputs for one user-initiated analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub resume: Option<ResumeUpload>,
    pub job_description: String,
}

/// Checks required inputs and returns the resume to analyze.
pub fn validate(request: &AnalysisRequest) -> Result<&ResumeUpload, AppError> {
    let resume = request
        .resume
        .as_ref()
        .filter(|r| !r.bytes.is_empty())
        .filter(|_| !request.job_description.trim().is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_INPUT_MESSAGE.to_string()))?;

    let head = &resume.bytes[..resume.bytes.len().min(8)];
    if !is_pdf_upload(&resume.file_name, resume.content_type.as_deref(), head) {
        return Err(AppError::Validation(NOT_PDF_MESSAGE.to_string()));
    }

    Ok(resume)
}

/// Runs one analysis end to end.
///
/// Document and transport faults are returned as errors; an unusable model
/// reply is not an error and comes back as `AnalysisOutcome::Failure`.
pub async fn run_analysis(
    generator: &dyn TextGenerator,
    request: &AnalysisRequest,
    diagnostics: bool,
) -> Result<AnalysisOutcome, AppError> {
    let resume = validate(request)?;

    info!(
        "Analyzing '{}' ({} bytes) against a {}-character job description",
        resume.file_name,
        resume.bytes.len(),
        request.job_description.chars().count()
    );

    let resume_text = extract_resume_text_blocking(resume.bytes.clone()).await?;

    analyze_resume_text(generator, &resume_text, &request.job_description, diagnostics).await
}

/// Model call and normalization for already-extracted resume text.
pub async fn analyze_resume_text(
    generator: &dyn TextGenerator,
    resume_text: &str,
    job_description: &str,
    diagnostics: bool,
) -> Result<AnalysisOutcome, AppError> {
    let prompt = build_analysis_prompt(resume_text, job_description);
    let reply = generator.generate(&prompt).await?;
    info!(
        "Model {} replied with {} characters",
        generator.model(),
        reply.chars().count()
    );

    Ok(normalize_reply(&reply, diagnostics))
}
