//! Error types for question domain validation and parsing.

use super::QuestionId;
use thiserror::Error;

/// Errors returned while constructing or transitioning domain question values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionDomainError {
    /// The question content is empty after trimming.
    #[error("question content must not be empty")]
    EmptyContent,

    /// The question is already closed and cannot be closed again.
    #[error("question already closed: {0}")]
    AlreadyClosed(QuestionId),
}

/// Error returned while parsing question statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown question status: {0}")]
pub struct ParseQuestionStatusError(pub String);
