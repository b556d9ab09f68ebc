//! Diesel schema for task record persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title, non-empty after trimming.
        #[max_length = 255]
        title -> Varchar,
        /// Task description, empty string when not supplied.
        description -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp, assigned once at insert.
        created_at -> Timestamptz,
    }
}
