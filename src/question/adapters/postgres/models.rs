//! Diesel row models for question persistence.

use super::schema::questions;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for question records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QuestionRow {
    /// Question identifier.
    pub id: uuid::Uuid,
    /// Identifier of the issue the question is attached to.
    pub issue_id: uuid::Uuid,
    /// Question content.
    pub content: String,
    /// Assignee JSON payload.
    pub assignee: Value,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Closing timestamp, set when the question is closed.
    pub closed_at: Option<DateTime<Utc>>,
}

/// Insert model for question records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestionRow {
    /// Question identifier.
    pub id: uuid::Uuid,
    /// Identifier of the issue the question is attached to.
    pub issue_id: uuid::Uuid,
    /// Question content.
    pub content: String,
    /// Assignee JSON payload.
    pub assignee: Value,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Closing timestamp, set when the question is closed.
    pub closed_at: Option<DateTime<Utc>>,
}
