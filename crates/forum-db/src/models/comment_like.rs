//! Comment like database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comment_likes table
///
/// A row's existence means "liked"; unlike removes the row. The unique
/// (comment_id, user_id) constraint prevents duplicates.
#[derive(Debug, Clone, FromRow)]
pub struct CommentLikeModel {
    pub id: i64,
    pub comment_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Aggregated like count per comment
#[derive(Debug, Clone, FromRow)]
pub struct CommentLikeCountModel {
    pub comment_id: i64,
    pub count: i64,
}
