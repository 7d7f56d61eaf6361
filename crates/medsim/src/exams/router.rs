use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::ExamSubmission;
use super::repository::{ExamRepository, RepositoryError};
use super::service::{ExamService, ExamServiceError};

/// Router exposing exam submission and listing.
pub fn exam_router<R>(service: Arc<ExamService<R>>) -> Router
where
    R: ExamRepository + 'static,
{
    Router::new()
        .route(
            "/api/exam",
            get(list_handler::<R>).post(submit_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ExamService<R>>>,
    payload: Result<axum::Json<ExamSubmission>, JsonRejection>,
) -> Response
where
    R: ExamRepository + 'static,
{
    let axum::Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected(rejection),
    };

    match service.submit(submission) {
        Ok(record) => success(record),
        Err(err) => failure(err),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ExamService<R>>>) -> Response
where
    R: ExamRepository + 'static,
{
    match service.recent() {
        Ok(records) => success(records),
        Err(err) => failure(err),
    }
}

fn success<T: serde::Serialize>(data: T) -> Response {
    let payload = json!({
        "success": true,
        "data": data,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn rejected(rejection: JsonRejection) -> Response {
    let payload = json!({
        "success": false,
        "error": rejection.body_text(),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn failure(err: ExamServiceError) -> Response {
    let status = match &err {
        ExamServiceError::MissingAnswers => StatusCode::BAD_REQUEST,
        ExamServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ExamServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    let payload = json!({
        "success": false,
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
