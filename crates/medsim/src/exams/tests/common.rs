use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::exams::domain::{ExamRecord, ExamSubmission};
use crate::exams::repository::{ExamRepository, RepositoryError};
use crate::exams::ExamService;

pub(super) fn answers() -> Value {
    json!({
        "chiefComplaint": "Epigastric pain for 3 days",
        "differentialDiagnosis": ["Peptic ulcer disease", "Acute pancreatitis"],
        "finalDiagnosis": "Peptic ulcer disease"
    })
}

pub(super) fn submission() -> ExamSubmission {
    ExamSubmission {
        exam_answers: Some(answers()),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<ExamRecord>>>,
}

impl ExamRepository for MemoryRepository {
    fn insert(&self, record: ExamRecord) -> Result<ExamRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list_recent(&self) -> Result<Vec<ExamRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records = guard.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

pub(super) struct ConflictRepository;

impl ExamRepository for ConflictRepository {
    fn insert(&self, _record: ExamRecord) -> Result<ExamRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn list_recent(&self) -> Result<Vec<ExamRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ExamRepository for UnavailableRepository {
    fn insert(&self, _record: ExamRecord) -> Result<ExamRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }

    fn list_recent(&self) -> Result<Vec<ExamRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<ExamService<MemoryRepository>>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = Arc::new(ExamService::new(Arc::new(repository.clone())));
    (service, repository)
}
