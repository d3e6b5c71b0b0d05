//! In-memory repository for question workflow tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::question::{
    domain::{IssueId, Question, QuestionId},
    ports::{QuestionRepository, QuestionRepositoryError, QuestionRepositoryResult},
};

/// Thread-safe in-memory question repository.
///
/// Questions are indexed per issue in insertion order, which doubles as
/// creation order for the listing methods.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionRepository {
    state: Arc<RwLock<InMemoryQuestionState>>,
}

#[derive(Debug, Default)]
struct InMemoryQuestionState {
    questions: HashMap<QuestionId, Question>,
    issue_index: HashMap<IssueId, Vec<QuestionId>>,
}

impl InMemoryQuestionRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Helper to collect an issue's questions in creation order.
fn questions_in_order(state: &InMemoryQuestionState, issue_id: IssueId) -> Vec<Question> {
    state
        .issue_index
        .get(&issue_id)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| state.questions.get(id).cloned())
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn store(&self, question: &Question) -> QuestionRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            QuestionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.questions.contains_key(&question.id()) {
            return Err(QuestionRepositoryError::DuplicateQuestion(question.id()));
        }

        state
            .issue_index
            .entry(question.issue_id())
            .or_default()
            .push(question.id());
        state.questions.insert(question.id(), question.clone());
        Ok(())
    }

    async fn update(&self, question: &Question) -> QuestionRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            QuestionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.questions.contains_key(&question.id()) {
            return Err(QuestionRepositoryError::NotFound(question.id()));
        }

        // Questions never move between issues, so the issue index needs no
        // maintenance on update.
        state.questions.insert(question.id(), question.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: QuestionId) -> QuestionRepositoryResult<Option<Question>> {
        let state = self.state.read().map_err(|err| {
            QuestionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.questions.get(&id).cloned())
    }

    async fn list_for_issue(&self, issue_id: IssueId) -> QuestionRepositoryResult<Vec<Question>> {
        let state = self.state.read().map_err(|err| {
            QuestionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(questions_in_order(&state, issue_id))
    }

    async fn list_open_for_issue(
        &self,
        issue_id: IssueId,
    ) -> QuestionRepositoryResult<Vec<Question>> {
        let state = self.state.read().map_err(|err| {
            QuestionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut questions = questions_in_order(&state, issue_id);
        questions.retain(Question::is_open);
        Ok(questions)
    }
}
