//! Per-browser session context.
//!
//! Holds what the page needs between requests: the diagnostic-mode flag, the
//! current analysis, and a one-shot notice. Rendering takes a `Session`
//! explicitly; nothing here is process-global.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::models::AnalysisOutcome;

pub const SESSION_COOKIE: &str = "recruitease_session";

/// Severity of a one-shot notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

/// One completed analysis held until the user re-analyzes or resets.
#[derive(Debug, Clone)]
pub struct AnalysisRecord {
    pub outcome: AnalysisOutcome,
    pub resume_name: String,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub diagnostics: bool,
    pub record: Option<AnalysisRecord>,
    pub notice: Option<Notice>,
    /// Prefills the job description box after a redirect.
    pub job_description: String,
    pub last_seen: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            diagnostics: false,
            record: None,
            notice: None,
            job_description: String::new(),
            last_seen: Utc::now(),
        }
    }
}

impl Session {
    /// Clears the current result. The diagnostic flag survives a reset.
    pub fn reset(&mut self) {
        self.record = None;
        self.notice = None;
        self.job_description.clear();
    }
}

/// In-memory session store keyed by the session cookie.
///
/// A session only enters the map on its first write. Reads for an unknown id
/// return a fresh `Session` without storing it.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    fn prune(&self, sessions: &mut HashMap<Uuid, Session>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= self.ttl);
        if sessions.len() < before {
            debug!("Pruned {} idle session(s)", before - sessions.len());
        }
    }

    /// Snapshot of the session for `id`. Unknown or expired ids read as a
    /// fresh session.
    pub async fn load(&self, id: Uuid) -> Session {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.prune(&mut sessions, now);

        match sessions.get_mut(&id) {
            Some(session) => {
                session.last_seen = now;
                session.clone()
            }
            None => Session::default(),
        }
    }

    /// Applies `f` to the stored session under the write lock, creating the
    /// session if needed. Fields `f` does not touch keep whatever concurrent
    /// requests last wrote.
    pub async fn update<F, R>(&self, id: Uuid, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.prune(&mut sessions, now);

        let session = sessions.entry(id).or_default();
        session.last_seen = now;
        f(session)
    }
}

/// Reads the session id from the request's `Cookie` header.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// The request's session id, or a newly minted one for a first visit.
pub fn session_id_or_new(headers: &HeaderMap) -> Uuid {
    session_id_from_headers(headers).unwrap_or_else(Uuid::new_v4)
}

/// `Set-Cookie` value for a session id.
pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
