//! Response normalizer: turns raw model text into an `AnalysisOutcome`.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::analysis::models::{AnalysisOutcome, AnalysisResult, ErrorResult};

const GENERIC_FAILURE: &str = "Failed to process the response. Please try again.";

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("reply JSON is a {0}, expected an object")]
    NotAnObject(&'static str),

    #[error("reply JSON does not match the analysis schema: {0}")]
    Schema(serde_json::Error),
}

impl NormalizeError {
    pub fn category(&self) -> &'static str {
        match self {
            NormalizeError::InvalidJson(_) => "invalid_json",
            NormalizeError::NotAnObject(_) => "not_an_object",
            NormalizeError::Schema(_) => "schema_mismatch",
        }
    }
}

/// Strips a ```json ... ``` or ``` ... ``` wrapper. Both the opening and the
/// closing fence must be present; otherwise the trimmed text is returned.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .and_then(|rest| rest.strip_suffix("```"))
        .or_else(|| {
            text.strip_prefix("```")
                .and_then(|rest| rest.strip_suffix("```"))
        });
    match inner {
        Some(inner) => inner.trim(),
        None => text,
    }
}

/// Parses fence-stripped reply text into an `AnalysisResult`.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, NormalizeError> {
    let value: Value =
        serde_json::from_str(strip_code_fences(raw)).map_err(NormalizeError::InvalidJson)?;

    let kind = match &value {
        Value::Object(_) => None,
        Value::Array(_) => Some("array"),
        Value::String(_) => Some("string"),
        Value::Number(_) => Some("number"),
        Value::Bool(_) => Some("boolean"),
        Value::Null => Some("null"),
    };
    if let Some(kind) = kind {
        return Err(NormalizeError::NotAnObject(kind));
    }

    serde_json::from_value(value).map_err(NormalizeError::Schema)
}

/// Converts raw model text into an outcome. Never fails: unusable replies
/// become an `ErrorResult`, carrying the raw text only when `diagnostics` is on.
pub fn normalize_reply(raw: &str, diagnostics: bool) -> AnalysisOutcome {
    match parse_analysis(raw) {
        Ok(result) => AnalysisOutcome::Success(result),
        Err(e) => {
            warn!(category = e.category(), "Model reply rejected: {e}");
            let failure = if diagnostics {
                ErrorResult {
                    error: format!("Failed to process the response: {e}"),
                    raw_response: Some(raw.to_string()),
                }
            } else {
                ErrorResult {
                    error: GENERIC_FAILURE.to_string(),
                    raw_response: None,
                }
            };
            AnalysisOutcome::Failure(failure)
        }
    }
}
