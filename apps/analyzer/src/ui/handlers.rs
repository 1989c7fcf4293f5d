//! Axum route handlers for the HTML page.
//!
//! Form actions follow post/redirect/get: they update the session and
//! redirect to `/`, which renders it.

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::handlers::read_analysis_form;
use crate::analysis::pipeline::run_analysis;
use crate::session::{session_cookie, session_id_or_new, AnalysisRecord, Notice};
use crate::state::AppState;
use crate::ui::page::render_page;

fn redirect_home(id: Uuid) -> Response {
    (
        [(header::SET_COOKIE, session_cookie(id))],
        Redirect::to("/"),
    )
        .into_response()
}

/// GET /
pub async fn handle_index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let id = session_id_or_new(&headers);
    let session = state.sessions.load(id).await;
    let page = render_page(&session);

    // Notices are shown once.
    if let Some(shown) = session.notice {
        state
            .sessions
            .update(id, |s| {
                if s.notice.as_ref() == Some(&shown) {
                    s.notice = None;
                }
            })
            .await;
    }

    ([(header::SET_COOKIE, session_cookie(id))], Html(page)).into_response()
}

/// POST /analyze
///
/// The model call can take a while; the session is only written once it
/// returns, and only the fields this request owns are changed.
pub async fn handle_analyze_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let id = session_id_or_new(&headers);
    let diagnostics = state.sessions.load(id).await.diagnostics;

    let form = match read_analysis_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            e.log();
            state
                .sessions
                .update(id, |s| s.notice = Some(Notice::error(e.user_message())))
                .await;
            return redirect_home(id);
        }
    };

    let job_description = form.request.job_description.clone();
    let resume_name = form
        .request
        .resume
        .as_ref()
        .map(|r| r.file_name.clone())
        .unwrap_or_default();
    let result = run_analysis(state.llm.as_ref(), &form.request, diagnostics).await;

    state
        .sessions
        .update(id, |session| {
            session.job_description = job_description;
            match result {
                Ok(outcome) => {
                    info!(session = %id, success = outcome.is_success(), "Analysis stored");
                    session.notice = None;
                    session.record = Some(AnalysisRecord {
                        outcome,
                        resume_name,
                        analyzed_at: Utc::now(),
                    });
                }
                Err(e) => {
                    e.log();
                    session.notice = Some(Notice::error(e.user_message()));
                }
            }
        })
        .await;

    redirect_home(id)
}

/// POST /reset
pub async fn handle_reset(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let id = session_id_or_new(&headers);
    state.sessions.update(id, |s| s.reset()).await;
    redirect_home(id)
}

#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    /// Checkbox: present when checked.
    pub diagnostics: Option<String>,
}

/// POST /settings
pub async fn handle_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SettingsForm>,
) -> Response {
    let id = session_id_or_new(&headers);
    let enabled = form.diagnostics.is_some();
    state
        .sessions
        .update(id, |s| {
            s.diagnostics = enabled;
            s.notice = Some(Notice::info(if enabled {
                "Debug mode enabled."
            } else {
                "Debug mode disabled."
            }));
        })
        .await;
    redirect_home(id)
}
