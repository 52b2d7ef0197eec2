use super::domain::{SubmissionId, SubmissionStatus};
use crate::assessment::domain::Theme;
use crate::assessment::report::AssessmentSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stored attempt: intake metadata plus the persisted score summary.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub submission_id: SubmissionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub answered: usize,
    pub question_count: usize,
    pub summary: AssessmentSummary,
}

impl SubmissionRecord {
    pub fn top_theme(&self) -> Option<Theme> {
        self.summary.theme_order.first().copied()
    }

    pub fn status_view(&self) -> SubmissionStatusView {
        SubmissionStatusView {
            submission_id: self.submission_id.clone(),
            status: self.status.label(),
            submitted_at: self.submitted_at,
            answered: self.answered,
            question_count: self.question_count,
            top_theme: self.top_theme(),
        }
    }
}

/// Sanitized representation of an attempt for listings and intake replies.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionStatusView {
    pub submission_id: SubmissionId,
    pub status: &'static str,
    pub submitted_at: DateTime<Utc>,
    pub answered: usize,
    pub question_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_theme: Option<Theme>,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook fired after an attempt is stored, so a review dashboard
/// can refresh without polling.
pub trait SubmissionNotifier: Send + Sync {
    fn publish(&self, event: SubmissionEvent) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionEvent {
    pub submission_id: SubmissionId,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_theme: Option<Theme>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
