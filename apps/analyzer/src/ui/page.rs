//! Page shell: header, sidebar, input form and notices.

use crate::session::{NoticeLevel, Session};
use crate::ui::html::{card, escape};
use crate::ui::panels::render_record;
use crate::ui::styles::STYLESHEET;

const RESUME_TIPS: &[&str] = &[
    "Tailor your resume to the job description",
    "Quantify your achievements with numbers",
    "Use action verbs (Led, Developed, Implemented)",
    "Include relevant keywords from the job posting",
    "Keep your resume concise and well-formatted",
];

/// Renders the whole page for one session.
pub fn render_page(session: &Session) -> String {
    let mut main = String::from(
        "<h1 class='main-header'>📝 RecruitEase: ATS Resume Analyzer</h1>",
    );
    main.push_str(&card(
        None,
        "<h3>Welcome to RecruitEase!</h3>\
         <p>Our AI-powered tool analyzes your resume against job descriptions and provides \
         actionable feedback to increase your chances of getting past ATS systems and \
         landing that interview.</p>",
    ));

    if let Some(notice) = &session.notice {
        let class = match notice.level {
            NoticeLevel::Error => "notice-error",
            NoticeLevel::Info => "notice-info",
        };
        main.push_str(&format!(
            "<div class='notice {class}'>{}</div>",
            escape(&notice.message)
        ));
    }

    main.push_str(&input_form(session));

    if let Some(record) = &session.record {
        main.push_str(&render_record(record, session));
    }

    format!(
        "<!DOCTYPE html>\
         <html lang='en'><head><meta charset='utf-8'>\
         <meta name='viewport' content='width=device-width, initial-scale=1'>\
         <title>RecruitEase | ATS Resume Analyzer</title>\
         <style>{STYLESHEET}</style></head>\
         <body><div class='layout'>{}<main class='main'>{main}</main></div></body></html>",
        sidebar(session)
    )
}

fn input_form(session: &Session) -> String {
    format!(
        "<h2>📋 Upload &amp; Analyze</h2>\
         <form method='post' action='/analyze' enctype='multipart/form-data'>\
         <div class='columns'>\
         <div class='card'><p class='section-header'>📄 Job Description</p>\
         <textarea name='job_description' placeholder='Paste the complete job description here...'>{}</textarea></div>\
         <div class='card'><p class='section-header'>📎 Resume Upload</p>\
         <label>Upload your resume (PDF format)</label><br>\
         <input type='file' name='resume' accept='application/pdf,.pdf'>\
         <p>Your resume will be analyzed against the job description. \
         Make sure both are complete for the best results.</p></div>\
         </div>\
         <div class='actions'><button type='submit'>🔍 Analyze My Resume</button></div>\
         </form>",
        escape(&session.job_description)
    )
}

fn sidebar(session: &Session) -> String {
    let checked = if session.diagnostics { " checked" } else { "" };
    let tips: String = RESUME_TIPS
        .iter()
        .map(|tip| format!("<li>{tip}</li>"))
        .collect();

    format!(
        "<aside class='sidebar'>\
         <h2>Settings &amp; Tips</h2>\
         <h3>⚙️ Settings</h3>\
         <form method='post' action='/settings'>\
         <label><input type='checkbox' name='diagnostics'{checked}> Enable Debug Mode</label>\
         <button type='submit'>Save</button></form>\
         <h3>📝 Resume Tips</h3><ul>{tips}</ul>\
         <h3>ℹ️ About RecruitEase</h3>\
         <p>RecruitEase helps you optimize your resume for ATS systems using advanced AI \
         analysis. Upload your resume, paste the job description, and get instant feedback.</p>\
         <div class='footer'>© RecruitEase | v{}</div>\
         </aside>",
        env!("CARGO_PKG_VERSION")
    )
}
