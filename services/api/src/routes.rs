use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use medsim::chats::{chat_router, ChatRepository, ChatService};
use medsim::conversation::ConversationAnalysis;
use medsim::evaluation::{self, CaseSummary, EvaluationInput, EvaluationResult};
use medsim::exams::{exam_router, ExamRepository, ExamService};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
pub(crate) struct EvaluationResponse {
    pub(crate) evaluation: EvaluationResult,
    pub(crate) conversation: ConversationAnalysis,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) ignored_domains: Vec<String>,
}

pub(crate) fn with_service_routes<E, C>(
    exams: Arc<ExamService<E>>,
    chats: Arc<ChatService<C>>,
) -> axum::Router
where
    E: ExamRepository + 'static,
    C: ChatRepository + 'static,
{
    exam_router(exams)
        .merge(chat_router(chats))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/cases", axum::routing::get(cases_endpoint))
        .route(
            "/api/v1/evaluation",
            axum::routing::post(evaluation_endpoint),
        )
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

pub(crate) async fn cases_endpoint() -> Json<Vec<CaseSummary>> {
    Json(evaluation::catalog::summaries())
}

pub(crate) async fn evaluation_endpoint(
    Json(input): Json<EvaluationInput>,
) -> Json<EvaluationResponse> {
    let ignored_domains: Vec<String> = input
        .evaluation_metric_scores
        .unrecognized_domains()
        .into_iter()
        .map(str::to_string)
        .collect();
    if !ignored_domains.is_empty() {
        debug!(?ignored_domains, "ignoring unrecognised score domains");
    }

    let evaluation = input.evaluate();
    let conversation = ConversationAnalysis::from_items(&input.conversation_data);

    info!(
        case = %evaluation.case,
        earned = evaluation.total.earned,
        max = evaluation.total.max,
        "evaluation scored"
    );

    Json(EvaluationResponse {
        evaluation,
        conversation,
        ignored_domains,
    })
}
