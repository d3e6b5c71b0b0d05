//! `PostgreSQL` repository implementation for question storage.

use super::{
    models::{NewQuestionRow, QuestionRow},
    schema::questions,
};
use crate::question::{
    domain::{
        IssueId, PersistedQuestionData, Question, QuestionAssignee, QuestionId, QuestionStatus,
    },
    ports::{QuestionRepository, QuestionRepositoryError, QuestionRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by question adapters.
pub type QuestionPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed question repository.
#[derive(Debug, Clone)]
pub struct PostgresQuestionRepository {
    pool: QuestionPgPool,
}

impl PostgresQuestionRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: QuestionPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> QuestionRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> QuestionRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(QuestionRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(QuestionRepositoryError::persistence)?
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn store(&self, question: &Question) -> QuestionRepositoryResult<()> {
        let question_id = question.id();
        let new_row = question_to_new_row(question)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(questions::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        QuestionRepositoryError::DuplicateQuestion(question_id)
                    }
                    _ => QuestionRepositoryError::persistence(err),
                })?;

            Ok(())
        })
        .await
    }

    async fn update(&self, question: &Question) -> QuestionRepositoryResult<()> {
        let question_id = question.id();
        let assignee = serde_json::to_value(question.assignee())
            .map_err(QuestionRepositoryError::persistence)?;
        let content = question.content().to_owned();
        let status = question.status().as_str().to_owned();
        let updated_at = question.updated_at();
        let closed_at = question.closed_at();

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                questions::table.filter(questions::id.eq(question_id.into_inner())),
            )
            .set((
                questions::content.eq(content),
                questions::assignee.eq(assignee),
                questions::status.eq(status),
                questions::updated_at.eq(updated_at),
                questions::closed_at.eq(closed_at),
            ))
            .execute(connection)
            .map_err(QuestionRepositoryError::persistence)?;

            if affected == 0 {
                return Err(QuestionRepositoryError::NotFound(question_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: QuestionId) -> QuestionRepositoryResult<Option<Question>> {
        self.run_blocking(move |connection| {
            let row = questions::table
                .filter(questions::id.eq(id.into_inner()))
                .select(QuestionRow::as_select())
                .first::<QuestionRow>(connection)
                .optional()
                .map_err(QuestionRepositoryError::persistence)?;
            row.map(row_to_question).transpose()
        })
        .await
    }

    async fn list_for_issue(&self, issue_id: IssueId) -> QuestionRepositoryResult<Vec<Question>> {
        self.run_blocking(move |connection| {
            let rows = questions::table
                .filter(questions::issue_id.eq(issue_id.into_inner()))
                .order((questions::created_at.asc(), questions::id.asc()))
                .select(QuestionRow::as_select())
                .load::<QuestionRow>(connection)
                .map_err(QuestionRepositoryError::persistence)?;
            rows.into_iter().map(row_to_question).collect()
        })
        .await
    }

    async fn list_open_for_issue(
        &self,
        issue_id: IssueId,
    ) -> QuestionRepositoryResult<Vec<Question>> {
        self.run_blocking(move |connection| {
            let rows = questions::table
                .filter(questions::issue_id.eq(issue_id.into_inner()))
                .filter(questions::status.eq(QuestionStatus::Open.as_str()))
                .order((questions::created_at.asc(), questions::id.asc()))
                .select(QuestionRow::as_select())
                .load::<QuestionRow>(connection)
                .map_err(QuestionRepositoryError::persistence)?;
            rows.into_iter().map(row_to_question).collect()
        })
        .await
    }
}

/// Converts a domain question into an insertable row.
///
/// # Errors
///
/// Returns a persistence error when the assignee payload cannot be
/// serialized.
pub fn question_to_new_row(question: &Question) -> QuestionRepositoryResult<NewQuestionRow> {
    let assignee =
        serde_json::to_value(question.assignee()).map_err(QuestionRepositoryError::persistence)?;

    Ok(NewQuestionRow {
        id: question.id().into_inner(),
        issue_id: question.issue_id().into_inner(),
        content: question.content().to_owned(),
        assignee,
        status: question.status().as_str().to_owned(),
        created_at: question.created_at(),
        updated_at: question.updated_at(),
        closed_at: question.closed_at(),
    })
}

/// Converts a stored row back into the domain question aggregate.
///
/// # Errors
///
/// Returns a persistence error when the assignee payload or status column
/// holds data the domain model rejects.
pub fn row_to_question(row: QuestionRow) -> QuestionRepositoryResult<Question> {
    let QuestionRow {
        id,
        issue_id,
        content,
        assignee: persisted_assignee,
        status: persisted_status,
        created_at,
        updated_at,
        closed_at,
    } = row;

    let assignee = serde_json::from_value::<QuestionAssignee>(persisted_assignee)
        .map_err(QuestionRepositoryError::persistence)?;
    let status = QuestionStatus::try_from(persisted_status.as_str())
        .map_err(QuestionRepositoryError::persistence)?;

    let data = PersistedQuestionData {
        id: QuestionId::from_uuid(id),
        issue_id: IssueId::from_uuid(issue_id),
        content,
        assignee,
        status,
        created_at,
        updated_at,
        closed_at,
    };
    Ok(Question::from_persisted(data))
}
