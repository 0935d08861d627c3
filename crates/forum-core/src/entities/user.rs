//! User entity - represents a registered forum account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
///
/// The password hash is deliberately not part of the entity; it lives only in
/// the persistence layer and is fetched separately for credential checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub fullname: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, username: String, fullname: String) -> Self {
        Self {
            id,
            username,
            fullname,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            Snowflake::new(1),
            "johndoe".to_string(),
            "John Doe".to_string(),
        );
        assert_eq!(user.id, Snowflake::new(1));
        assert_eq!(user.username, "johndoe");
        assert_eq!(user.fullname, "John Doe");
    }
}
