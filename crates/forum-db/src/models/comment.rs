//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
///
/// Soft-deleted rows stay in the table with `is_deleted = true`; the stored
/// content is never rewritten.
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub thread_id: i64,
    pub owner_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}
