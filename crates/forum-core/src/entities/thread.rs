//! Thread entity - represents a discussion thread

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Maximum length of a thread title
pub const MAX_TITLE_LEN: usize = 255;

/// Thread entity
///
/// Threads are immutable after creation; only their comments relation grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: Snowflake,
    pub title: String,
    pub body: String,
    pub owner_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Thread {
    /// Create a new Thread
    pub fn new(id: Snowflake, title: String, body: String, owner_id: Snowflake) -> Self {
        Self {
            id,
            title,
            body,
            owner_id,
            created_at: Utc::now(),
        }
    }

    /// Check if the given user owns this thread
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }
}
