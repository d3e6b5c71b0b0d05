//! `PostgreSQL` adapters for question persistence.

mod models;
mod repository;
mod schema;

pub use models::{NewQuestionRow, QuestionRow};
pub use repository::{
    PostgresQuestionRepository, QuestionPgPool, question_to_new_row, row_to_question,
};
