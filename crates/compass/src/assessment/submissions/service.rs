use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{AssessmentSubmission, SubmissionId, SubmissionStatus};
use super::repository::{
    NotifyError, RepositoryError, SubmissionEvent, SubmissionNotifier, SubmissionRecord,
    SubmissionRepository,
};
use crate::assessment::bank::QuestionBank;
use crate::assessment::domain::{AnswerSheet, Theme};
use crate::assessment::report::AssessmentReport;
use crate::assessment::scoring::ScoringEngine;
use crate::catalog::{CachedCatalog, CatalogError, CatalogSource, OccupationRow};
use chrono::Utc;

/// Service composing the question bank, scoring engine, cached occupation
/// catalog, repository, and notifier.
pub struct AssessmentService<R, N, C> {
    bank: Arc<QuestionBank>,
    engine: ScoringEngine,
    catalog: Arc<CachedCatalog<C>>,
    repository: Arc<R>,
    notifier: Arc<N>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("attempt-{id:06}"))
}

impl<R, N, C> AssessmentService<R, N, C>
where
    R: SubmissionRepository + 'static,
    N: SubmissionNotifier + 'static,
    C: CatalogSource + 'static,
{
    pub fn new(
        bank: Arc<QuestionBank>,
        catalog: Arc<CachedCatalog<C>>,
        repository: Arc<R>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            bank,
            engine: ScoringEngine::likert(),
            catalog,
            repository,
            notifier,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Score an answer sheet without persisting anything.
    pub fn report(
        &self,
        answers: &AnswerSheet,
        explicit_order: Option<&[Theme]>,
    ) -> Result<AssessmentReport, CatalogError> {
        let catalog = self.catalog.get()?;
        Ok(self.report_against(answers, catalog.rows(), explicit_order))
    }

    /// Score against caller-supplied occupation rows, bypassing the cache.
    pub fn report_against(
        &self,
        answers: &AnswerSheet,
        rows: &[OccupationRow],
        explicit_order: Option<&[Theme]>,
    ) -> AssessmentReport {
        AssessmentReport::build(
            &self.engine,
            self.bank.questions(),
            answers,
            rows,
            explicit_order,
        )
    }

    /// Score, persist, and announce one attempt.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<SubmissionRecord, AssessmentServiceError> {
        let report = self.report(&submission.answers, None)?;

        let answered = self
            .bank
            .questions()
            .iter()
            .filter(|question| submission.answers.contains_key(&question.id))
            .count();
        let question_count = self.bank.len();
        let status = if answered == question_count {
            SubmissionStatus::Complete
        } else {
            SubmissionStatus::Partial
        };

        let record = SubmissionRecord {
            submission_id: next_submission_id(),
            respondent: submission.respondent,
            submitted_at: Utc::now(),
            status,
            answered,
            question_count,
            summary: report.summary(),
        };

        let stored = self.repository.insert(record)?;

        self.notifier.publish(SubmissionEvent {
            submission_id: stored.submission_id.clone(),
            status: stored.status,
            top_theme: stored.top_theme(),
        })?;

        Ok(stored)
    }

    /// Fetch a stored attempt for review.
    pub fn get(&self, id: &SubmissionId) -> Result<SubmissionRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Latest attempts, newest first, for the review dashboard.
    pub fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, AssessmentServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}
