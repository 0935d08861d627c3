//! RefreshToken entity - a server-side record of an issued refresh token
//!
//! Stored so refresh tokens can be revoked before their JWT expiry.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// RefreshToken entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Create a new RefreshToken record
    pub fn new(id: Snowflake, user_id: Snowflake, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            expires_at,
            created_at: Utc::now(),
            revoked_at: None,
        }
    }

    /// Check if the token has been revoked
    #[inline]
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Check if the token is past its expiry
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Check if the token is still usable
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_revoked() && !self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_fresh_token_is_valid() {
        let token = RefreshToken::new(
            Snowflake::new(1),
            Snowflake::new(100),
            Utc::now() + Duration::days(7),
        );
        assert!(token.is_valid());
        assert!(!token.is_revoked());
        assert!(!token.is_expired());
    }

    #[test]
    fn test_revoked_token_is_invalid() {
        let mut token = RefreshToken::new(
            Snowflake::new(1),
            Snowflake::new(100),
            Utc::now() + Duration::days(7),
        );
        token.revoked_at = Some(Utc::now());
        assert!(!token.is_valid());
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let token = RefreshToken::new(
            Snowflake::new(1),
            Snowflake::new(100),
            Utc::now() - Duration::seconds(1),
        );
        assert!(!token.is_valid());
    }
}
