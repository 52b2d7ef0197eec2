//! Attempt intake and review: scoring happens synchronously at submit time
//! and only the percentage summary is persisted, never the raw aggregates.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AssessmentSubmission, SubmissionId, SubmissionStatus};
pub use repository::{
    NotifyError, RepositoryError, SubmissionEvent, SubmissionNotifier, SubmissionRecord,
    SubmissionRepository, SubmissionStatusView,
};
pub use router::submission_router;
pub use service::{AssessmentService, AssessmentServiceError};
