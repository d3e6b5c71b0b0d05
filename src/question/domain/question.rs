//! Question aggregate root and related lifecycle types.

use super::{IssueId, ParseQuestionStatusError, QuestionDomainError, QuestionId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Question lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    /// Question awaits an answer.
    Open,
    /// Question has been closed.
    Closed,
}

impl QuestionStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl TryFrom<&str> for QuestionStatus {
    type Error = ParseQuestionStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseQuestionStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who may answer a question.
///
/// A question is either held by one specific user or open to anyone. The two
/// cases are mutually exclusive, so the "assigned and simultaneously for
/// anyone" combination cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionAssignee {
    /// Any user may answer.
    Anyone,
    /// Only the named user is expected to answer.
    User {
        /// Identifier of the assigned user.
        user_id: UserId,
    },
}

impl QuestionAssignee {
    /// Returns `true` when any user may answer the question.
    #[must_use]
    pub const fn is_for_anyone(&self) -> bool {
        matches!(self, Self::Anyone)
    }

    /// Returns the assigned user, if the question has one.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        match self {
            Self::Anyone => None,
            Self::User { user_id } => Some(*user_id),
        }
    }

    /// Returns `true` when the given user is eligible to answer.
    #[must_use]
    pub fn allows(&self, user_id: UserId) -> bool {
        match self {
            Self::Anyone => true,
            Self::User {
                user_id: assigned_user_id,
            } => *assigned_user_id == user_id,
        }
    }
}

impl fmt::Display for QuestionAssignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anyone => write!(f, "anyone"),
            Self::User { user_id } => write!(f, "user {user_id}"),
        }
    }
}

/// Question aggregate root.
///
/// A question is attached to exactly one issue, carries free-form content,
/// and is open until closed. The host tracker creates questions; this crate
/// reads them and drives the open-to-closed transition.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use querent::question::domain::{IssueId, Question, QuestionAssignee, UserId};
///
/// let clock = DefaultClock;
/// let reviewer = UserId::new();
/// let question = Question::open(
///     IssueId::new(),
///     "Which database does the importer target?",
///     QuestionAssignee::User { user_id: reviewer },
///     &clock,
/// )
/// .expect("valid question");
///
/// assert!(question.is_open());
/// assert!(question.is_pending_for(reviewer));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    issue_id: IssueId,
    content: String,
    assignee: QuestionAssignee,
    status: QuestionStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted question aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedQuestionData {
    /// Persisted question identifier.
    pub id: QuestionId,
    /// Issue the question is attached to.
    pub issue_id: IssueId,
    /// Persisted question content.
    pub content: String,
    /// Persisted assignee.
    pub assignee: QuestionAssignee,
    /// Persisted lifecycle status.
    pub status: QuestionStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted closing timestamp, if the question was closed.
    pub closed_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Creates a new open question attached to an issue.
    ///
    /// Content is trimmed before storage.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionDomainError::EmptyContent`] if the content is empty
    /// after trimming.
    pub fn open(
        issue_id: IssueId,
        content: impl Into<String>,
        assignee: QuestionAssignee,
        clock: &impl Clock,
    ) -> Result<Self, QuestionDomainError> {
        let raw_content = content.into();
        let normalized_content = raw_content.trim();
        if normalized_content.is_empty() {
            return Err(QuestionDomainError::EmptyContent);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: QuestionId::new(),
            issue_id,
            content: normalized_content.to_owned(),
            assignee,
            status: QuestionStatus::Open,
            created_at: timestamp,
            updated_at: timestamp,
            closed_at: None,
        })
    }

    /// Reconstructs a question from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedQuestionData) -> Self {
        Self {
            id: data.id,
            issue_id: data.issue_id,
            content: data.content,
            assignee: data.assignee,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
            closed_at: data.closed_at,
        }
    }

    /// Returns the question identifier.
    #[must_use]
    pub const fn id(&self) -> QuestionId {
        self.id
    }

    /// Returns the identifier of the issue the question is attached to.
    #[must_use]
    pub const fn issue_id(&self) -> IssueId {
        self.issue_id
    }

    /// Returns the question content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns who may answer the question.
    #[must_use]
    pub const fn assignee(&self) -> &QuestionAssignee {
        &self.assignee
    }

    /// Returns the question lifecycle status.
    #[must_use]
    pub const fn status(&self) -> QuestionStatus {
        self.status
    }

    /// Returns `true` while the question awaits an answer.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.status, QuestionStatus::Open)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the closing timestamp, if the question was closed.
    #[must_use]
    pub const fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    /// Returns `true` when the question is open and the given user is
    /// eligible to answer it: the question is assigned to that user, or it
    /// is open to anyone.
    #[must_use]
    pub fn is_pending_for(&self, user_id: UserId) -> bool {
        self.is_open() && self.assignee.allows(user_id)
    }

    /// Closes the question, stamping the closing time.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionDomainError::AlreadyClosed`] if the question is not
    /// open.
    pub fn close(&mut self, clock: &impl Clock) -> Result<(), QuestionDomainError> {
        if !self.is_open() {
            return Err(QuestionDomainError::AlreadyClosed(self.id));
        }
        let timestamp = clock.utc();
        self.status = QuestionStatus::Closed;
        self.closed_at = Some(timestamp);
        self.updated_at = timestamp;
        Ok(())
    }
}
