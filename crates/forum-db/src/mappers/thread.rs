//! Thread entity <-> model mapper

use forum_core::entities::Thread;
use forum_core::value_objects::Snowflake;

use crate::models::ThreadModel;

/// Convert ThreadModel to Thread entity
impl From<ThreadModel> for Thread {
    fn from(model: ThreadModel) -> Self {
        Thread {
            id: Snowflake::new(model.id),
            title: model.title,
            body: model.body,
            owner_id: Snowflake::new(model.owner_id),
            created_at: model.created_at,
        }
    }
}
