//! Diesel row models for task document persistence.

use super::schema::tasks;
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task documents.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskDocumentRow {
    /// Store-assigned task identifier.
    pub id: uuid::Uuid,
    /// Task fields document.
    pub document: Value,
}

/// Insert model for task documents.
///
/// Timestamps are assigned by the database defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskDocumentRow {
    /// Store-assigned task identifier.
    pub id: uuid::Uuid,
    /// Task fields document.
    pub document: Value,
}
