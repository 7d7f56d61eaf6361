//! Storage of finished patient interview transcripts.
//!
//! Mirrors [`crate::exams`]: a [`ChatRepository`] seam, a thin service and an
//! axum router serving `/api/chat`.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ChatId, ChatRecord, ChatSubmission};
pub use repository::{ChatRepository, ChatRepositoryError};
pub use router::chat_router;
pub use service::{ChatService, ChatServiceError};
