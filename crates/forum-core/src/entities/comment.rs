//! Comment entity - represents a comment on a thread

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Placeholder shown instead of the content of a soft-deleted comment
pub const COMMENT_DELETED_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// Comment entity
///
/// Comments are never hard-deleted: deletion flips `is_deleted` and the row
/// survives. The original content stays stored; masking happens at read time
/// through [`Comment::visible_content`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub thread_id: Snowflake,
    pub owner_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Snowflake, thread_id: Snowflake, owner_id: Snowflake, content: String) -> Self {
        Self {
            id,
            thread_id,
            owner_id,
            content,
            created_at: Utc::now(),
            is_deleted: false,
        }
    }

    /// Content as it may be shown to consumers: the stored text, or the
    /// fixed placeholder once the comment has been soft-deleted
    pub fn visible_content(&self) -> &str {
        if self.is_deleted {
            COMMENT_DELETED_PLACEHOLDER
        } else {
            &self.content
        }
    }

    /// Check if the given user owns this comment
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Mark the comment as deleted
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_comment() -> Comment {
        Comment::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "hello".to_string(),
        )
    }

    #[test]
    fn test_visible_content_live() {
        let comment = sample_comment();
        assert_eq!(comment.visible_content(), "hello");
    }

    #[test]
    fn test_visible_content_masked_after_delete() {
        let mut comment = sample_comment();
        comment.mark_deleted();

        assert_eq!(comment.visible_content(), COMMENT_DELETED_PLACEHOLDER);
        // The stored content itself is untouched
        assert_eq!(comment.content, "hello");
    }

    #[test]
    fn test_ownership() {
        let comment = sample_comment();
        assert!(comment.is_owned_by(Snowflake::new(100)));
        assert!(!comment.is_owned_by(Snowflake::new(101)));
    }
}
