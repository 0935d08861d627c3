//! User entity <-> model mapper

use forum_core::entities::User;
use forum_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The password hash is an infrastructure concern and never crosses into the
/// domain entity.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            fullname: model.fullname,
            created_at: model.created_at,
        }
    }
}
