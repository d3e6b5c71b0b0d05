//! Repository port for question persistence and per-issue lookup.

use crate::question::domain::{IssueId, Question, QuestionId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for question repository operations.
pub type QuestionRepositoryResult<T> = Result<T, QuestionRepositoryError>;

/// Question persistence contract.
///
/// Listing methods return questions in creation order so rendered summaries
/// are stable across reads.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Stores a new question.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionRepositoryError::DuplicateQuestion`] when the
    /// question identifier already exists.
    async fn store(&self, question: &Question) -> QuestionRepositoryResult<()>;

    /// Persists changes to an existing question (status, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`QuestionRepositoryError::NotFound`] when the question does
    /// not exist.
    async fn update(&self, question: &Question) -> QuestionRepositoryResult<()>;

    /// Finds a question by identifier.
    ///
    /// Returns `None` when the question does not exist.
    async fn find_by_id(&self, id: QuestionId) -> QuestionRepositoryResult<Option<Question>>;

    /// Returns every question attached to the given issue, open or closed,
    /// in creation order.
    async fn list_for_issue(&self, issue_id: IssueId) -> QuestionRepositoryResult<Vec<Question>>;

    /// Returns the open questions attached to the given issue, in creation
    /// order.
    async fn list_open_for_issue(
        &self,
        issue_id: IssueId,
    ) -> QuestionRepositoryResult<Vec<Question>>;
}

/// Errors returned by question repository implementations.
#[derive(Debug, Clone, Error)]
pub enum QuestionRepositoryError {
    /// A question with the same identifier already exists.
    #[error("duplicate question identifier: {0}")]
    DuplicateQuestion(QuestionId),

    /// The question was not found.
    #[error("question not found: {0}")]
    NotFound(QuestionId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl QuestionRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
