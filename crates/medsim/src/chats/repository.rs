use super::domain::ChatRecord;

pub trait ChatRepository: Send + Sync {
    fn insert(&self, record: ChatRecord) -> Result<ChatRecord, ChatRepositoryError>;
    /// Every stored transcript, ordered newest first.
    fn list_recent(&self) -> Result<Vec<ChatRecord>, ChatRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatRepositoryError {
    #[error("This chat record already exists.")]
    Conflict,
    #[error("chat storage unavailable: {0}")]
    Unavailable(String),
}
