use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::bank::QuestionBank;
use crate::assessment::domain::{AnswerSheet, Theme};
use crate::assessment::submissions::domain::AssessmentSubmission;
use crate::assessment::submissions::repository::{
    NotifyError, RepositoryError, SubmissionEvent, SubmissionNotifier, SubmissionRecord,
    SubmissionRepository,
};
use crate::assessment::submissions::service::AssessmentService;
use crate::catalog::{CachedCatalog, OccupationRow, StaticCatalogSource};

pub(super) fn bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::standard())
}

fn row(occupation: &str, theme: &str) -> OccupationRow {
    OccupationRow {
        occupation: occupation.to_string(),
        theme: theme.to_string(),
    }
}

pub(super) fn catalog_rows() -> Vec<OccupationRow> {
    vec![
        row("Automotive Mechanic", "RIC"),
        row("Data Analyst", "IRC"),
        row("Graphic Designer", "AES"),
        row("School Counselor", "SEA"),
        row("Sales Manager", "ECS"),
        row("Auditor", "CEI"),
    ]
}

fn rating_for(code: Option<Theme>) -> u8 {
    match code {
        Some(Theme::Realistic) => 5,
        Some(Theme::Investigative) => 4,
        Some(Theme::Conventional) => 4,
        Some(Theme::Social) | Some(Theme::Enterprising) => 3,
        Some(Theme::Artistic) => 2,
        None => 3,
    }
}

/// Every bank question answered, with Realistic items rated highest.
pub(super) fn full_answers(bank: &QuestionBank) -> AnswerSheet {
    bank.questions()
        .iter()
        .map(|question| (question.id, rating_for(question.code)))
        .collect()
}

/// Only the first half of the bank answered, as an abandoned attempt would.
pub(super) fn partial_answers(bank: &QuestionBank) -> AnswerSheet {
    bank.questions()
        .iter()
        .take(bank.len() / 2)
        .map(|question| (question.id, 4))
        .collect()
}

pub(super) fn submission(answers: AnswerSheet) -> AssessmentSubmission {
    AssessmentSubmission {
        respondent: Some("Jordan Reyes".to_string()),
        answers,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl SubmissionRepository for MemoryRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.submission_id == record.submission_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(
        &self,
        id: &crate::assessment::submissions::domain::SubmissionId,
    ) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.submission_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl SubmissionRepository for ConflictRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(
        &self,
        _id: &crate::assessment::submissions::domain::SubmissionId,
    ) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn fetch(
        &self,
        _id: &crate::assessment::submissions::domain::SubmissionId,
    ) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("backend offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<SubmissionEvent>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<SubmissionEvent> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl SubmissionNotifier for MemoryNotifier {
    fn publish(&self, event: SubmissionEvent) -> Result<(), NotifyError> {
        let mut guard = self.events.lock().expect("notifier mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

pub(super) type MemoryService =
    AssessmentService<MemoryRepository, MemoryNotifier, StaticCatalogSource>;

pub(super) fn build_service() -> (Arc<MemoryService>, MemoryRepository, MemoryNotifier) {
    let repository = MemoryRepository::default();
    let notifier = MemoryNotifier::default();
    let catalog = Arc::new(CachedCatalog::new(StaticCatalogSource::new(catalog_rows())));
    let service = Arc::new(AssessmentService::new(
        bank(),
        catalog,
        Arc::new(repository.clone()),
        Arc::new(notifier.clone()),
    ));
    (service, repository, notifier)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
