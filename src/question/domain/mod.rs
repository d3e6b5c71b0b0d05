//! Domain model for issue-attached questions.
//!
//! The aggregate root is [`Question`]; identifiers are strongly typed
//! wrappers around UUIDs so issue, user, and question identifiers cannot be
//! confused with one another.

mod error;
mod ids;
mod question;

pub use error::{ParseQuestionStatusError, QuestionDomainError};
pub use ids::{IssueId, QuestionId, UserId};
pub use question::{PersistedQuestionData, Question, QuestionAssignee, QuestionStatus};
