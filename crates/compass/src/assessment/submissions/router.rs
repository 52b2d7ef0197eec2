use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentSubmission, SubmissionId};
use super::repository::{
    RepositoryError, SubmissionNotifier, SubmissionRecord, SubmissionRepository,
};
use super::service::{AssessmentService, AssessmentServiceError};
use crate::catalog::CatalogSource;

const DEFAULT_RECENT_LIMIT: usize = 20;

/// Router builder exposing HTTP endpoints for intake and review.
pub fn submission_router<R, N, C>(service: Arc<AssessmentService<R, N, C>>) -> Router
where
    R: SubmissionRepository + 'static,
    N: SubmissionNotifier + 'static,
    C: CatalogSource + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments",
            post(submit_handler::<R, N, C>).get(recent_handler::<R, N, C>),
        )
        .route(
            "/api/v1/assessments/:submission_id",
            get(record_handler::<R, N, C>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, N, C>(
    State(service): State<Arc<AssessmentService<R, N, C>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: SubmissionNotifier + 'static,
    C: CatalogSource + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Catalog(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "submission already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn record_handler<R, N, C>(
    State(service): State<Arc<AssessmentService<R, N, C>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: SubmissionNotifier + 'static,
    C: CatalogSource + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "submission_id": id.0,
                "error": "submission not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecentQuery {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

pub(crate) async fn recent_handler<R, N, C>(
    State(service): State<Arc<AssessmentService<R, N, C>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: SubmissionNotifier + 'static,
    C: CatalogSource + 'static,
{
    match service.recent(query.limit) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(SubmissionRecord::status_view).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
