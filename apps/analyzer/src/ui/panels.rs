//! Result panels for a completed analysis.
//!
//! Every function takes the data it renders plus the `Session` flags it
//! depends on; model-supplied text is escaped here.

use crate::analysis::models::{AnalysisOutcome, AnalysisResult, ErrorResult};
use crate::session::{AnalysisRecord, Session};
use crate::ui::html::{card, escape};

/// Match score band. Thresholds: ≥70 strong, ≥40 moderate, otherwise low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Low,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 70 {
            ScoreBand::Strong
        } else if percentage >= 40 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Strong => "#28a745",
            ScoreBand::Moderate => "#ffc107",
            ScoreBand::Low => "#dc3545",
        }
    }

    pub fn assessment(self) -> &'static str {
        match self {
            ScoreBand::Strong => "Great match! Your resume is well-aligned with this position.",
            ScoreBand::Moderate => {
                "Moderate match. Consider enhancing your resume with the suggested improvements."
            }
            ScoreBand::Low => {
                "Low match. Significant improvements needed to increase your chances."
            }
        }
    }

    fn notice_class(self) -> &'static str {
        match self {
            ScoreBand::Strong => "notice-success",
            ScoreBand::Moderate => "notice-warning",
            ScoreBand::Low => "notice-error",
        }
    }
}

const TROUBLESHOOTING_TIPS: &[&str] = &[
    "The AI response is not in valid JSON format",
    "Try simplifying your resume or job description",
    "Check if your API key is valid and has necessary permissions",
    "Try again later as the service might be experiencing high traffic",
];

const ACTION_PLAN: &[(&str, &str)] = &[
    (
        "Add Missing Keywords",
        "Include the missing keywords highlighted above where relevant in your resume.",
    ),
    (
        "Quantify Achievements",
        "Add specific metrics and numbers to demonstrate your impact.",
    ),
    (
        "Optimize Format",
        "Ensure your resume is ATS-friendly with a clean, simple format.",
    ),
    (
        "Tailor Your Summary",
        "Customize your professional summary to match this specific role.",
    ),
    (
        "Add Recommended Skills",
        "Incorporate relevant skills you possess but haven't mentioned.",
    ),
];

/// Renders the results area for the session's current record.
pub fn render_record(record: &AnalysisRecord, session: &Session) -> String {
    match &record.outcome {
        AnalysisOutcome::Failure(err) => render_error(err, session),
        AnalysisOutcome::Success(result) => render_result(result, record, session),
    }
}

pub fn render_error(err: &ErrorResult, session: &Session) -> String {
    let mut html = format!(
        "<div class='notice notice-error'>{}</div>",
        escape(&err.error)
    );

    if session.diagnostics {
        if let Some(raw) = &err.raw_response {
            html.push_str("<h3>Raw AI Response</h3>");
            html.push_str(&format!("<pre>{}</pre>", escape(raw)));
            html.push_str("<h3>Troubleshooting Tips</h3>");
            html.push_str(&bullet_list(TROUBLESHOOTING_TIPS.iter().copied()));
        }
    }

    html
}

pub fn render_result(result: &AnalysisResult, record: &AnalysisRecord, session: &Session) -> String {
    let mut html = String::from("<h2>📊 Analysis Results</h2>");
    html.push_str(&format!(
        "<p>Resume <b>{}</b> analyzed at {}.</p>",
        escape(&record.resume_name),
        record.analyzed_at.format("%Y-%m-%d %H:%M UTC")
    ));

    html.push_str(&format!(
        "<div class='columns'><div class='narrow'>{}</div><div class='wide'>{}</div></div>",
        score_panel(result),
        strengths_panel(result)
    ));
    html.push_str(&keywords_panel(result));
    html.push_str(&summary_panel(result));
    html.push_str(&skills_panel(result));
    html.push_str(&action_plan_panel());

    if session.diagnostics {
        html.push_str(&debug_panel(result));
    }

    html.push_str(
        "<form class='actions' method='post' action='/reset'>\
         <button type='submit'>📝 Analyze Another Resume</button></form>",
    );
    html
}

pub fn score_panel(result: &AnalysisResult) -> String {
    let Some(percentage) = result.match_percentage() else {
        return card(
            None,
            &format!(
                "<h2 class='match-score'>Match Score</h2>\
                 <div class='notice notice-warning'>Score unavailable: the model returned '{}'.</div>",
                escape(&result.jd_match)
            ),
        );
    };

    let band = ScoreBand::from_percentage(percentage);
    let color = band.color();
    card(
        None,
        &format!(
            "<h2 class='match-score'>Match Score</h2>\
             <h1 class='match-score' style='color: {color};'>{percentage}%</h1>\
             <div class='match-progress'>\
             <div class='match-progress-bar' style='width: {percentage}%; background-color: {color};'>{percentage}%</div>\
             </div>\
             <div class='notice {}'>{}</div>",
            band.notice_class(),
            band.assessment()
        ),
    )
}

fn strengths_panel(result: &AnalysisResult) -> String {
    let strengths: String = result
        .strength_areas
        .iter()
        .map(|s| format!("<p>✅ {}</p>", escape(s)))
        .collect();
    let improvements: String = result
        .improvement_areas
        .iter()
        .map(|a| format!("<p>⚠️ {}</p>", escape(a)))
        .collect();

    card(
        Some("💪 Your Strengths"),
        &format!(
            "{strengths}<p class='section-header' style='margin-top: 20px;'>🔧 Areas for Improvement</p>{improvements}"
        ),
    )
}

pub fn keywords_panel(result: &AnalysisResult) -> String {
    let missing = if result.missing_keywords.is_empty() {
        "<div class='notice notice-info'>No critical missing keywords detected!</div>".to_string()
    } else {
        pills(&result.missing_keywords, "keyword-pill", "🔍")
    };
    let matched = if result.matched_keywords.is_empty() {
        "<div class='notice notice-info'>No matched keywords found.</div>".to_string()
    } else {
        pills(&result.matched_keywords, "keyword-pill matched-keyword", "✓")
    };

    card(
        None,
        &format!(
            "<div class='columns'>\
             <div><p class='section-header'>❌ Missing Keywords</p>{missing}</div>\
             <div><p class='section-header'>✅ Matched Keywords</p>{matched}</div>\
             </div>"
        ),
    )
}

fn summary_panel(result: &AnalysisResult) -> String {
    let summary = if result.profile_summary.trim().is_empty() {
        "No profile summary available.".to_string()
    } else {
        escape(&result.profile_summary)
    };
    card(Some("📋 Profile Summary"), &format!("<p>{summary}</p>"))
}

pub fn skills_panel(result: &AnalysisResult) -> String {
    let skills: String = result
        .recommended_skills
        .iter()
        .map(|s| format!("<div class='skill'>🔹 {}</div>", escape(s)))
        .collect();
    card(
        Some("🚀 Recommended Skills"),
        &format!(
            "<p>Consider adding these skills to your resume to increase your match rate:</p>\
             <div class='skill-grid'>{skills}</div>"
        ),
    )
}

fn action_plan_panel() -> String {
    let steps: String = ACTION_PLAN
        .iter()
        .map(|(title, detail)| format!("<li><b>{title}</b>: {detail}</li>"))
        .collect();
    card(Some("📝 Your Action Plan"), &format!("<ol>{steps}</ol>"))
}

fn debug_panel(result: &AnalysisResult) -> String {
    let json = serde_json::to_string_pretty(result).unwrap_or_default();
    card(
        Some("🛠️ Debug Information"),
        &format!("<pre>{}</pre>", escape(&json)),
    )
}

fn pills(items: &[String], class: &str, marker: &str) -> String {
    items
        .iter()
        .map(|item| format!("<span class='{class}'>{marker} {}</span>", escape(item)))
        .collect()
}

fn bullet_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let items: String = items.map(|i| format!("<li>{}</li>", escape(i))).collect();
    format!("<ul>{items}</ul>")
}
