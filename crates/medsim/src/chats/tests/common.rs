use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::chats::domain::{ChatRecord, ChatSubmission};
use crate::chats::repository::{ChatRepository, ChatRepositoryError};
use crate::chats::ChatService;

pub(super) fn history() -> Value {
    json!([
        { "role": "user", "content": "What brings you in today?" },
        { "role": "assistant", "content": "A burning pain up here, worse before meals." }
    ])
}

pub(super) fn submission() -> ChatSubmission {
    ChatSubmission {
        chat_history: history(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<ChatRecord>>>,
}

impl ChatRepository for MemoryRepository {
    fn insert(&self, record: ChatRecord) -> Result<ChatRecord, ChatRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.push(record.clone());
        Ok(record)
    }

    fn list_recent(&self) -> Result<Vec<ChatRecord>, ChatRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records = guard.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

pub(super) struct UnavailableRepository;

impl ChatRepository for UnavailableRepository {
    fn insert(&self, _record: ChatRecord) -> Result<ChatRecord, ChatRepositoryError> {
        Err(ChatRepositoryError::Unavailable("connection refused".to_string()))
    }

    fn list_recent(&self) -> Result<Vec<ChatRecord>, ChatRepositoryError> {
        Err(ChatRepositoryError::Unavailable("connection refused".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<ChatService<MemoryRepository>>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = Arc::new(ChatService::new(Arc::new(repository.clone())));
    (service, repository)
}
