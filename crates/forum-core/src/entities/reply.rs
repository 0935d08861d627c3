//! Reply entity - represents a reply to a comment

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Placeholder shown instead of the content of a soft-deleted reply
pub const REPLY_DELETED_PLACEHOLDER: &str = "**balasan telah dihapus**";

/// Reply entity
///
/// Same soft-delete rules as [`crate::entities::Comment`], with its own
/// placeholder string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: Snowflake,
    pub comment_id: Snowflake,
    pub owner_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Reply {
    /// Create a new Reply
    pub fn new(id: Snowflake, comment_id: Snowflake, owner_id: Snowflake, content: String) -> Self {
        Self {
            id,
            comment_id,
            owner_id,
            content,
            created_at: Utc::now(),
            is_deleted: false,
        }
    }

    /// Content as it may be shown to consumers
    pub fn visible_content(&self) -> &str {
        if self.is_deleted {
            REPLY_DELETED_PLACEHOLDER
        } else {
            &self.content
        }
    }

    /// Check if the given user owns this reply
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Mark the reply as deleted
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }
}
