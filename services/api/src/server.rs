use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryChatRepository, InMemoryExamRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use medsim::chats::ChatService;
use medsim::config::AppConfig;
use medsim::error::AppError;
use medsim::exams::ExamService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let exam_service = Arc::new(ExamService::new(Arc::new(
        InMemoryExamRepository::default(),
    )));
    let chat_service = Arc::new(ChatService::new(Arc::new(
        InMemoryChatRepository::default(),
    )));

    let app = with_service_routes(exam_service, chat_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(%addr, log_level = %config.telemetry.log_level, "exam scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
