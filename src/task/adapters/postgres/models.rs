//! Diesel row models for task record persistence.

use super::schema::tasks;
use crate::task::domain::TaskPatch;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// Task title.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub title: String,
    /// Task description.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub description: String,
    /// Completion flag.
    #[diesel(sql_type = diesel::sql_types::Bool)]
    pub completed: bool,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Changeset for partial task updates.
///
/// `None` fields are skipped by Diesel, so omitted fields are preserved
/// on the stored record. Identifier and creation timestamp are not part
/// of the changeset and can never be rewritten.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title, when supplied.
    pub title: Option<String>,
    /// Replacement description, when supplied.
    pub description: Option<String>,
    /// Replacement completion flag, when supplied.
    pub completed: Option<bool>,
}

impl From<&TaskPatch> for TaskChangeset {
    fn from(patch: &TaskPatch) -> Self {
        Self {
            title: patch.title().map(|title| title.as_str().to_owned()),
            description: patch.description().map(str::to_owned),
            completed: patch.completed(),
        }
    }
}
