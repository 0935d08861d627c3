//! Reply entity <-> model mapper

use forum_core::entities::Reply;
use forum_core::value_objects::Snowflake;

use crate::models::ReplyModel;

/// Convert ReplyModel to Reply entity
impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: Snowflake::new(model.id),
            comment_id: Snowflake::new(model.comment_id),
            owner_id: Snowflake::new(model.owner_id),
            content: model.content,
            created_at: model.created_at,
            is_deleted: model.is_deleted,
        }
    }
}
