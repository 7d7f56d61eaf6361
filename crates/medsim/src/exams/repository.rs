use super::domain::ExamRecord;

/// Storage abstraction for submitted exams.
pub trait ExamRepository: Send + Sync {
    fn insert(&self, record: ExamRecord) -> Result<ExamRecord, RepositoryError>;
    /// Every stored record, ordered newest first.
    fn list_recent(&self) -> Result<Vec<ExamRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("This exam record already exists.")]
    Conflict,
    #[error("exam storage unavailable: {0}")]
    Unavailable(String),
}
