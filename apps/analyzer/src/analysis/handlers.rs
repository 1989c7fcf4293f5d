//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    Json,
};

use crate::analysis::models::AnalysisOutcome;
use crate::analysis::pipeline::{run_analysis, AnalysisRequest, ResumeUpload};
use crate::errors::AppError;
use crate::state::AppState;

/// Fields read from an analysis upload form.
#[derive(Debug, Default)]
pub struct AnalysisForm {
    pub request: AnalysisRequest,
    /// `None` when the form carried no `diagnostics` field.
    pub diagnostics: Option<bool>,
}

fn invalid_upload(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid upload: {}", e.body_text()))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

/// Reads `resume`, `job_description` and `diagnostics` from a multipart body.
/// Unknown fields are ignored. A file part with no name and no content (what
/// browsers send when nothing was chosen) counts as no upload.
pub async fn read_analysis_form(mut multipart: Multipart) -> Result<AnalysisForm, AppError> {
    let mut form = AnalysisForm::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_upload)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(invalid_upload)?;
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.request.resume = Some(ResumeUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "job_description" => {
                form.request.job_description = field.text().await.map_err(invalid_upload)?;
            }
            "diagnostics" => {
                let value = field.text().await.map_err(invalid_upload)?;
                form.diagnostics = Some(is_truthy(&value));
            }
            _ => {}
        }
    }

    Ok(form)
}

/// POST /api/v1/analyze
///
/// Multipart: `resume` (PDF), `job_description` (text), optional `diagnostics`.
/// Returns the analysis result, or `{error, raw_response?}` when the model
/// reply could not be used.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let form = read_analysis_form(multipart).await?;
    let diagnostics = form.diagnostics.unwrap_or(false);
    let outcome = run_analysis(state.llm.as_ref(), &form.request, diagnostics).await?;
    Ok(Json(outcome))
}
