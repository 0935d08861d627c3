//! User service
//!
//! Handles user registration.

use forum_common::auth::hash_password;
use forum_core::entities::User;
use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{RegisterUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterUserRequest) -> ServiceResult<UserResponse> {
        validate_username_charset(&request.username)?;

        // A taken username surfaces as a validation failure (400)
        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::Domain(DomainError::UsernameTaken(
                request.username,
            )));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(self.ctx.generate_id(), request.username, request.fullname);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        Ok(UserResponse::from(&user))
    }
}

/// Usernames are restricted to ASCII alphanumerics and underscore
fn validate_username_charset(username: &str) -> ServiceResult<()> {
    if username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(ServiceError::Domain(DomainError::ValidationError(
            "Username may only contain letters, digits, and underscores".to_string(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_charset() {
        assert!(validate_username_charset("john_doe42").is_ok());
        assert!(validate_username_charset("JohnDoe").is_ok());
        assert!(validate_username_charset("john doe").is_err());
        assert!(validate_username_charset("john-doe").is_err());
        assert!(validate_username_charset("john@doe").is_err());
    }
}
