use crate::cli::ServeArgs;
use crate::infra::{
    catalog_source, AppState, InMemoryNotifier, InMemorySubmissionRepository,
    SharedAssessmentService,
};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use compass::assessment::submissions::AssessmentService;
use compass::assessment::QuestionBank;
use compass::catalog::CachedCatalog;
use compass::config::AppConfig;
use compass::error::AppError;
use compass::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySubmissionRepository::default());
    let notifier = Arc::new(InMemoryNotifier::default());
    let catalog = Arc::new(CachedCatalog::new(catalog_source(&config.catalog)?));
    let occupations = catalog.get()?.len();
    let bank = Arc::new(QuestionBank::standard());
    let assessment_service: Arc<SharedAssessmentService> = Arc::new(AssessmentService::new(
        bank,
        catalog,
        repository,
        notifier,
    ));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, occupations, "assessment scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
