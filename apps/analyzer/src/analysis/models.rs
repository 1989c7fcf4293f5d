use serde::{Deserialize, Deserializer, Serialize};

/// Structured outcome of comparing a resume to a job description.
///
/// Field names on the wire are the exact keys the prompt asks the model for.
/// Absent and `null` fields decode to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "JD Match", default, deserialize_with = "null_as_empty")]
    pub jd_match: String,
    #[serde(rename = "MissingKeywords", default, deserialize_with = "null_as_empty")]
    pub missing_keywords: Vec<String>,
    #[serde(rename = "MatchedKeywords", default, deserialize_with = "null_as_empty")]
    pub matched_keywords: Vec<String>,
    #[serde(rename = "ProfileSummary", default, deserialize_with = "null_as_empty")]
    pub profile_summary: String,
    #[serde(rename = "StrengthAreas", default, deserialize_with = "null_as_empty")]
    pub strength_areas: Vec<String>,
    #[serde(rename = "ImprovementAreas", default, deserialize_with = "null_as_empty")]
    pub improvement_areas: Vec<String>,
    #[serde(rename = "RecommendedSkills", default, deserialize_with = "null_as_empty")]
    pub recommended_skills: Vec<String>,
}

/// Treats an explicit `null` like a missing field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AnalysisResult {
    /// Integer match score parsed from `"82%"`-style values.
    /// `None` when the value is not an integer in 0–100.
    pub fn match_percentage(&self) -> Option<u8> {
        let value = self.jd_match.trim().trim_matches('%').trim();
        match value.parse::<i64>() {
            Ok(n) if (0..=100).contains(&n) => Some(n as u8),
            _ => None,
        }
    }
}

/// Returned in place of an `AnalysisResult` when the reply cannot be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
    /// Untouched model reply; only populated in diagnostic mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Failure(ErrorResult),
    Success(AnalysisResult),
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success(_))
    }
}
