use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::ChatSubmission;
use super::repository::{ChatRepository, ChatRepositoryError};
use super::service::{ChatService, ChatServiceError};

/// Router exposing chat history storage and listing.
pub fn chat_router<R>(service: Arc<ChatService<R>>) -> Router
where
    R: ChatRepository + 'static,
{
    Router::new()
        .route("/api/chat", get(list_handler::<R>).post(save_handler::<R>))
        .with_state(service)
}

pub(crate) async fn save_handler<R>(
    State(service): State<Arc<ChatService<R>>>,
    payload: Result<axum::Json<ChatSubmission>, JsonRejection>,
) -> Response
where
    R: ChatRepository + 'static,
{
    let axum::Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return envelope_error(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match service.save(submission) {
        Ok(record) => success(record),
        Err(err) => failure(err),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ChatService<R>>>) -> Response
where
    R: ChatRepository + 'static,
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

fn failure(err: ChatServiceError) -> Response {
    let status = match &err {
        ChatServiceError::Repository(ChatRepositoryError::Conflict) => StatusCode::CONFLICT,
        ChatServiceError::Repository(ChatRepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    envelope_error(status, err.to_string())
}

fn envelope_error(status: StatusCode, error: String) -> Response {
    let payload = json!({
        "success": false,
        "error": error,
    });
    (status, axum::Json(payload)).into_response()
}
