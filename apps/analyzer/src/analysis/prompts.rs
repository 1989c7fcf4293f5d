// Prompt template for resume analysis.

/// ATS evaluation prompt. Replace `{resume_text}` and `{jd_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"
Act as a highly experienced ATS (Applicant Tracking System) specializing in software engineering,
data science, data analytics, and big data roles. Evaluate the resume against the provided job description.
Consider that the job market is competitive and provide insights for improvement.

Resume: {resume_text}
Job Description: {jd_text}

You must respond with ONLY a valid JSON object and nothing else. No markdown, no extra text.
The JSON should have this exact structure:
{
  "JD Match": "X%",
  "MissingKeywords": ["keyword1", "keyword2", "..."],
  "MatchedKeywords": ["keyword1", "keyword2", "..."],
  "ProfileSummary": "detailed summary here",
  "StrengthAreas": ["strength1", "strength2", "..."],
  "ImprovementAreas": ["area1", "area2", "..."],
  "RecommendedSkills": ["skill1", "skill2", "..."]
}
"#;

/// Interpolates both inputs verbatim. The job description is substituted
/// last so placeholder-looking text inside the resume is left alone.
pub fn build_analysis_prompt(resume_text: &str, jd_text: &str) -> String {
    let (head, tail) = ANALYSIS_PROMPT_TEMPLATE
        .split_once("{resume_text}")
        .unwrap_or((ANALYSIS_PROMPT_TEMPLATE, ""));
    format!("{head}{resume_text}{}", tail.replacen("{jd_text}", jd_text, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_inputs() {
        let prompt = build_analysis_prompt("Jane Doe, Rust engineer", "Senior Rust role");
        assert!(prompt.contains("Resume: Jane Doe, Rust engineer\n"));
        assert!(prompt.contains("Job Description: Senior Rust role\n"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{jd_text}"));
    }

    #[test]
    fn test_prompt_carries_schema() {
        let prompt = build_analysis_prompt("", "");
        for key in [
            "\"JD Match\"",
            "\"MissingKeywords\"",
            "\"MatchedKeywords\"",
            "\"ProfileSummary\"",
            "\"StrengthAreas\"",
            "\"ImprovementAreas\"",
            "\"RecommendedSkills\"",
        ] {
            assert!(prompt.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_placeholder_text_in_resume_is_not_substituted() {
        let prompt = build_analysis_prompt("literal {jd_text} in resume", "the JD");
        assert!(prompt.contains("Resume: literal {jd_text} in resume"));
        assert!(prompt.contains("Job Description: the JD"));
    }

    #[test]
    fn test_empty_inputs_are_allowed() {
        let prompt = build_analysis_prompt("", "");
        assert!(prompt.contains("Resume: \n"));
        assert!(prompt.contains("Job Description: \n"));
    }
}
