use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use compass::assessment::domain::AnswerSheet;
use compass::assessment::matching::{theme_letters, OccupationInsight};
use compass::assessment::report::{AssessmentSummary, OccupationGroupView};
use compass::assessment::submissions::{
    submission_router, AssessmentService, SubmissionNotifier, SubmissionRepository,
};
use compass::catalog::{CatalogSource, OccupationCatalog};
use compass::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct ReportRequest {
    pub(crate) answers: AnswerSheet,
    #[serde(default)]
    pub(crate) occupations_csv: Option<String>,
    #[serde(default)]
    pub(crate) theme_order: Option<String>,
    #[serde(default)]
    pub(crate) include_occupations: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReportResponse {
    pub(crate) data_source: CatalogOrigin,
    pub(crate) summary: AssessmentSummary,
    pub(crate) insights: Vec<OccupationInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) occupations: Option<Vec<OccupationGroupView>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CatalogOrigin {
    Inline,
    Configured,
}

pub(crate) fn with_assessment_routes<R, N, C>(
    service: Arc<AssessmentService<R, N, C>>,
) -> axum::Router
where
    R: SubmissionRepository + 'static,
    N: SubmissionNotifier + 'static,
    C: CatalogSource + 'static,
{
    let report_routes = axum::Router::new()
        .route(
            "/api/v1/assessments/report",
            axum::routing::post(report_endpoint::<R, N, C>),
        )
        .with_state(service.clone());

    submission_router(service)
        .merge(report_routes)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn report_endpoint<R, N, C>(
    State(service): State<Arc<AssessmentService<R, N, C>>>,
    Json(payload): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, AppError>
where
    R: SubmissionRepository + 'static,
    N: SubmissionNotifier + 'static,
    C: CatalogSource + 'static,
{
    let ReportRequest {
        answers,
        occupations_csv,
        theme_order,
        include_occupations,
    } = payload;

    let explicit = theme_order
        .as_deref()
        .map(theme_letters)
        .filter(|letters| !letters.is_empty());

    let (report, data_source) = if let Some(csv) = occupations_csv {
        let catalog = OccupationCatalog::from_reader(csv.as_bytes())?;
        (
            service.report_against(&answers, catalog.rows(), explicit.as_deref()),
            CatalogOrigin::Inline,
        )
    } else {
        (
            service.report(&answers, explicit.as_deref())?,
            CatalogOrigin::Configured,
        )
    };

    let occupations = include_occupations.then(|| report.occupation_groups());

    Ok(Json(ReportResponse {
        data_source,
        summary: report.summary(),
        insights: report.insights(),
        occupations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{
        catalog_source, InMemoryNotifier, InMemorySubmissionRepository, SharedAssessmentService,
    };
    use compass::assessment::domain::Theme;
    use compass::assessment::QuestionBank;
    use compass::catalog::CachedCatalog;
    use compass::config::CatalogConfig;

    fn build_service() -> Arc<SharedAssessmentService> {
        let source = catalog_source(&CatalogConfig::default()).expect("bundled catalog parses");
        Arc::new(AssessmentService::new(
            Arc::new(QuestionBank::standard()),
            Arc::new(CachedCatalog::new(source)),
            Arc::new(InMemorySubmissionRepository::default()),
            Arc::new(InMemoryNotifier::default()),
        ))
    }

    fn sample_answers(service: &SharedAssessmentService) -> AnswerSheet {
        service
            .bank()
            .questions()
            .iter()
            .map(|question| {
                let rating = match question.code {
                    Some(Theme::Realistic) => 5,
                    Some(Theme::Investigative) => 4,
                    _ => 2,
                };
                (question.id, rating)
            })
            .collect()
    }

    #[tokio::test]
    async fn report_endpoint_returns_summary_and_insights() {
        let service = build_service();
        let request = ReportRequest {
            answers: sample_answers(&service),
            occupations_csv: None,
            theme_order: None,
            include_occupations: false,
        };

        let Json(body) = report_endpoint(State(service), Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.data_source, CatalogOrigin::Configured);
        assert_eq!(body.summary.theme_percents.len(), 6);
        assert_eq!(body.summary.theme_order[0], Theme::Realistic);
        assert_eq!(body.insights.len(), 6);
        assert!(body.occupations.is_none());
    }

    #[tokio::test]
    async fn report_endpoint_accepts_an_inline_catalog() {
        let service = build_service();
        let request = ReportRequest {
            answers: sample_answers(&service),
            occupations_csv: Some("Occupation,Theme\nMechanic,RIC\nAnalyst,IRC\n".to_string()),
            theme_order: None,
            include_occupations: true,
        };

        let Json(body) = report_endpoint(State(service), Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.data_source, CatalogOrigin::Inline);
        let groups = body.occupations.expect("occupations included");
        let realistic = groups
            .iter()
            .find(|group| group.code == Theme::Realistic)
            .expect("realistic group present");
        assert_eq!(realistic.occupations.len(), 1);
        assert_eq!(realistic.occupations[0].occupation, "Mechanic");
    }

    #[tokio::test]
    async fn report_endpoint_honors_an_explicit_theme_order() {
        let service = build_service();
        let request = ReportRequest {
            answers: sample_answers(&service),
            occupations_csv: None,
            theme_order: Some("CSEAIR".to_string()),
            include_occupations: false,
        };

        let Json(body) = report_endpoint(State(service), Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.summary.theme_order[0], Theme::Conventional);
        assert_eq!(body.insights[0].code, Theme::Conventional);
    }
}
