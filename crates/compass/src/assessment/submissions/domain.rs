use crate::assessment::domain::AnswerSheet;
use serde::{Deserialize, Serialize};

/// Opaque identifier handed out when an attempt is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Payload a respondent (or the test UI on their behalf) posts when they
/// finish or abandon an attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
    pub answers: AnswerSheet,
}

/// Whether the attempt covered the whole bank. Abandoned attempts are the
/// expected common case and still score normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Complete,
    Partial,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Partial => "Partial",
        }
    }
}
