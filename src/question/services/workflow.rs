//! Service layer for the question workflow over tracker issues.

use crate::question::{
    domain::{IssueId, QuestionDomainError, UserId},
    ports::{QuestionRepository, QuestionRepositoryError, QuestionSummarizer, SummaryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

/// Service-level errors for question workflow operations.
#[derive(Debug, Error)]
pub enum QuestionWorkflowError {
    /// Domain transition failed.
    #[error(transparent)]
    Domain(#[from] QuestionDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] QuestionRepositoryError),
    /// Summary rendering failed.
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Result type for question workflow service operations.
pub type QuestionWorkflowResult<T> = Result<T, QuestionWorkflowError>;

/// Question workflow orchestration service.
///
/// Extends a host tracker's issues with question behaviour by composition:
/// the service is addressed by issue and user identifiers and owns no issue
/// state beyond the questions attached to it.
#[derive(Clone)]
pub struct QuestionWorkflowService<R, S, C>
where
    R: QuestionRepository,
    S: QuestionSummarizer,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    summarizer: Arc<S>,
    clock: Arc<C>,
}

impl<R, S, C> QuestionWorkflowService<R, S, C>
where
    R: QuestionRepository,
    S: QuestionSummarizer,
    C: Clock + Send + Sync,
{
    /// Creates a new question workflow service.
    #[must_use]
    pub const fn new(repository: Arc<R>, summarizer: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            repository,
            summarizer,
            clock,
        }
    }

    /// Renders the issue's questions as a single display string.
    ///
    /// Returns the empty string when the issue has no questions; otherwise
    /// delegates rendering to the summarizer. The question collection is
    /// read twice on the non-empty path: once to decide whether anything
    /// needs rendering and again to fetch the questions that are rendered.
    /// Repository doubles must expect both reads.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionWorkflowError::Repository`] when a read fails and
    /// [`QuestionWorkflowError::Summary`] when rendering fails.
    #[instrument(skip(self), fields(issue_id = %issue_id), err)]
    pub async fn formatted_questions(&self, issue_id: IssueId) -> QuestionWorkflowResult<String> {
        let existing = self.repository.list_for_issue(issue_id).await?;
        if existing.is_empty() {
            debug!("no questions attached to issue");
            return Ok(String::new());
        }

        let questions = self.repository.list_for_issue(issue_id).await?;
        let summary = self.summarizer.formatted_list(&questions)?;
        Ok(summary)
    }

    /// Returns whether the issue holds an open question the user is
    /// expected to answer: one assigned to that user, or one open to
    /// anyone.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionWorkflowError::Repository`] when the open-question
    /// lookup fails.
    #[instrument(skip(self), fields(issue_id = %issue_id, user_id = %user_id), err)]
    pub async fn has_pending_question(
        &self,
        issue_id: IssueId,
        user_id: UserId,
    ) -> QuestionWorkflowResult<bool> {
        let open_questions = self.repository.list_open_for_issue(issue_id).await?;
        Ok(open_questions
            .iter()
            .any(|question| question.is_pending_for(user_id)))
    }

    /// Closes every open question on the issue that is pending for the
    /// user.
    ///
    /// Each affected question goes through the domain close transition and
    /// is persisted exactly once. Open questions assigned to a different
    /// user are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionWorkflowError::Repository`] when a read or update
    /// fails and [`QuestionWorkflowError::Domain`] when a close transition
    /// is rejected.
    #[instrument(skip(self), fields(issue_id = %issue_id, user_id = %user_id), err)]
    pub async fn close_pending_questions(
        &self,
        issue_id: IssueId,
        user_id: UserId,
    ) -> QuestionWorkflowResult<()> {
        let open_questions = self.repository.list_open_for_issue(issue_id).await?;
        let mut closed = 0_usize;
        for mut question in open_questions {
            if !question.is_pending_for(user_id) {
                continue;
            }
            question.close(&*self.clock)?;
            self.repository.update(&question).await?;
            closed += 1;
        }
        debug!(closed, "closed pending questions");
        Ok(())
    }
}
