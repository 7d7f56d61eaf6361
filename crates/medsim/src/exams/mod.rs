//! Intake and listing of submitted exam answer sheets.
//!
//! Storage sits behind [`ExamRepository`]; the service binary wires an
//! in-memory implementation and a database adapter can slot in the same way.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ExamId, ExamRecord, ExamSubmission};
pub use repository::{ExamRepository, RepositoryError};
pub use router::exam_router;
pub use service::{ExamService, ExamServiceError};
