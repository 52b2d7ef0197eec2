use compass::assessment::submissions::{
    AssessmentService, NotifyError, RepositoryError, SubmissionEvent, SubmissionId,
    SubmissionNotifier, SubmissionRecord, SubmissionRepository,
};
use compass::catalog::{CatalogError, CatalogSource, FileCatalogSource, StaticCatalogSource};
use compass::config::CatalogConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type SharedAssessmentService =
    AssessmentService<InMemorySubmissionRepository, InMemoryNotifier, Box<dyn CatalogSource>>;

#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
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

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryNotifier {
    events: Arc<Mutex<Vec<SubmissionEvent>>>,
}

impl SubmissionNotifier for InMemoryNotifier {
    fn publish(&self, event: SubmissionEvent) -> Result<(), NotifyError> {
        let mut guard = self.events.lock().expect("notifier mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

impl InMemoryNotifier {
    pub(crate) fn events(&self) -> Vec<SubmissionEvent> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

/// Bundled reference table used when no occupations file is configured.
pub(crate) const SAMPLE_OCCUPATIONS_CSV: &str = "\
Occupation,Theme
Automotive Mechanic,RIC
Electrician,RIE
Carpenter,RCI
Park Ranger,RIS
Commercial Pilot,RIE
Data Analyst,IRC
Research Scientist,IRA
Forensic Examiner,ICR
Biomedical Engineer,IRE
Graphic Designer,AES
Photographer,AER
Copywriter,AIE
Interior Designer,AES
High School Teacher,SAE
School Counselor,SEA
Registered Nurse,SIC
Physical Therapist,SIE
Community Organizer,SEC
Sales Manager,ECS
Real Estate Agent,ECS
Small Business Owner,ESC
Marketing Manager,EAS
Accountant,CEI
Auditor,CEI
Bank Teller,CES
Logistics Coordinator,CER
";

pub(crate) fn catalog_source(
    config: &CatalogConfig,
) -> Result<Box<dyn CatalogSource>, CatalogError> {
    match &config.occupations_path {
        Some(path) => Ok(Box::new(FileCatalogSource::new(path.clone()))),
        None => Ok(Box::new(StaticCatalogSource::from_csv(
            SAMPLE_OCCUPATIONS_CSV,
        )?)),
    }
}
