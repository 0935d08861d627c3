//! CommentLike entity <-> model mapper

use forum_core::entities::CommentLike;
use forum_core::value_objects::Snowflake;

use crate::models::CommentLikeModel;

/// Convert CommentLikeModel to CommentLike entity
impl From<CommentLikeModel> for CommentLike {
    fn from(model: CommentLikeModel) -> Self {
        CommentLike {
            id: Snowflake::new(model.id),
            comment_id: Snowflake::new(model.comment_id),
            user_id: Snowflake::new(model.user_id),
            created_at: model.created_at,
        }
    }
}
