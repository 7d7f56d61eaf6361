use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

use super::domain::{ExamId, ExamRecord, ExamSubmission};
use super::repository::{ExamRepository, RepositoryError};

static EXAM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_exam_id() -> ExamId {
    let id = EXAM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ExamId(format!("exam-{id:06}"))
}

pub struct ExamService<R> {
    repository: Arc<R>,
}

impl<R> ExamService<R>
where
    R: ExamRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store an answer sheet.
    pub fn submit(&self, submission: ExamSubmission) -> Result<ExamRecord, ExamServiceError> {
        let exam_answers = match submission.exam_answers {
            Some(answers) if !is_blank(&answers) => answers,
            _ => return Err(ExamServiceError::MissingAnswers),
        };

        let record = ExamRecord {
            id: next_exam_id(),
            exam_answers,
            created_at: Utc::now(),
        };

        match self.repository.insert(record) {
            Ok(stored) => {
                info!(exam_id = %stored.id, "stored exam submission");
                Ok(stored)
            }
            Err(err) => {
                warn!(error = %err, "failed to store exam submission");
                Err(err.into())
            }
        }
    }

    /// Every stored submission, newest first.
    pub fn recent(&self) -> Result<Vec<ExamRecord>, ExamServiceError> {
        Ok(self.repository.list_recent()?)
    }
}

/// Falsy JSON values count as no answers at all.
fn is_blank(answers: &Value) -> bool {
    match answers {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExamServiceError {
    #[error("Missing required field: examAnswers")]
    MissingAnswers,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
