//! Diesel schema for question persistence.

diesel::table! {
    /// Question records attached to tracker issues.
    questions (id) {
        /// Question identifier.
        id -> Uuid,
        /// Identifier of the issue the question is attached to.
        issue_id -> Uuid,
        /// Question content.
        content -> Text,
        /// Assignee payload (anyone, or a specific user).
        assignee -> Jsonb,
        /// Question lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Closing timestamp, set when the question is closed.
        closed_at -> Nullable<Timestamptz>,
    }
}
