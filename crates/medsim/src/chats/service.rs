use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{ChatId, ChatRecord, ChatSubmission};
use super::repository::{ChatRepository, ChatRepositoryError};

static CHAT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_chat_id() -> ChatId {
    let id = CHAT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ChatId(format!("chat-{id:06}"))
}

pub struct ChatService<R> {
    repository: Arc<R>,
}

impl<R> ChatService<R>
where
    R: ChatRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn save(&self, submission: ChatSubmission) -> Result<ChatRecord, ChatServiceError> {
        let record = ChatRecord {
            id: next_chat_id(),
            chat_history: submission.chat_history,
            created_at: Utc::now(),
        };

        match self.repository.insert(record) {
            Ok(stored) => {
                info!(chat_id = %stored.id, "stored chat history");
                Ok(stored)
            }
            Err(err) => {
                warn!(error = %err, "failed to store chat history");
                Err(err.into())
            }
        }
    }

    pub fn recent(&self) -> Result<Vec<ChatRecord>, ChatServiceError> {
        Ok(self.repository.list_recent()?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error(transparent)]
    Repository(#[from] ChatRepositoryError),
}
