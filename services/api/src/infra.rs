use medsim::chats::{ChatRecord, ChatRepository, ChatRepositoryError};
use medsim::exams::{ExamRecord, ExamRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local exam storage; records are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryExamRepository {
    records: Arc<Mutex<Vec<ExamRecord>>>,
}

impl ExamRepository for InMemoryExamRepository {
    fn insert(&self, record: ExamRecord) -> Result<ExamRecord, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("exam store lock poisoned".to_string()))?;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list_recent(&self) -> Result<Vec<ExamRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("exam store lock poisoned".to_string()))?;
        let mut records = guard.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryChatRepository {
    records: Arc<Mutex<Vec<ChatRecord>>>,
}

impl ChatRepository for InMemoryChatRepository {
    fn insert(&self, record: ChatRecord) -> Result<ChatRecord, ChatRepositoryError> {
        let mut guard = self.records.lock().map_err(|_| {
            ChatRepositoryError::Unavailable("chat store lock poisoned".to_string())
        })?;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(ChatRepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list_recent(&self) -> Result<Vec<ChatRecord>, ChatRepositoryError> {
        let guard = self.records.lock().map_err(|_| {
            ChatRepositoryError::Unavailable("chat store lock poisoned".to_string())
        })?;
        let mut records = guard.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
