//! CommentLike entity - a user's like on a comment
//!
//! "Liked" is modeled as row presence: a (comment, user) row exists while the
//! like is active and is hard-deleted on unlike.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// CommentLike entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLike {
    pub id: Snowflake,
    pub comment_id: Snowflake,
    pub user_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl CommentLike {
    /// Create a new CommentLike
    pub fn new(id: Snowflake, comment_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            id,
            comment_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_like_creation() {
        let like = CommentLike::new(Snowflake::new(1), Snowflake::new(10), Snowflake::new(100));
        assert_eq!(like.comment_id, Snowflake::new(10));
        assert_eq!(like.user_id, Snowflake::new(100));
    }
}
