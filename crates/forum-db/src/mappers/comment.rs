//! Comment entity <-> model mapper

use forum_core::entities::Comment;
use forum_core::value_objects::Snowflake;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
///
/// The raw stored content is carried over untouched; masking of deleted
/// comments happens in the read path, not here.
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            thread_id: Snowflake::new(model.thread_id),
            owner_id: Snowflake::new(model.owner_id),
            content: model.content,
            created_at: model.created_at,
            is_deleted: model.is_deleted,
        }
    }
}
