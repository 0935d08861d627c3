//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Fullname must be 1-100 characters"))]
    pub fullname: String,
}

// ============================================================================
// Authentication Requests
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Logout request (refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// Thread Requests
// ============================================================================

/// Create thread request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThreadRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,
}

// ============================================================================
// Comment / Reply Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// Create reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_request_validation() {
        // Valid request
        let valid = RegisterUserRequest {
            username: "johndoe".to_string(),
            password: "secretpassword".to_string(),
            fullname: "John Doe".to_string(),
        };
        assert!(valid.validate().is_ok());

        // Invalid - empty username
        let empty_username = RegisterUserRequest {
            username: String::new(),
            password: "secretpassword".to_string(),
            fullname: "John Doe".to_string(),
        };
        assert!(empty_username.validate().is_err());

        // Invalid - username too long
        let long_username = RegisterUserRequest {
            username: "a".repeat(51),
            password: "secretpassword".to_string(),
            fullname: "John Doe".to_string(),
        };
        assert!(long_username.validate().is_err());

        // Invalid - password too short
        let short_password = RegisterUserRequest {
            username: "johndoe".to_string(),
            password: "short".to_string(),
            fullname: "John Doe".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_create_thread_validation() {
        let valid = CreateThreadRequest {
            title: "A thread".to_string(),
            body: "Thread body".to_string(),
        };
        assert!(valid.validate().is_ok());

        // Invalid - title over 255 characters
        let long_title = CreateThreadRequest {
            title: "a".repeat(256),
            body: "Thread body".to_string(),
        };
        assert!(long_title.validate().is_err());

        // Invalid - empty body
        let empty_body = CreateThreadRequest {
            title: "A thread".to_string(),
            body: String::new(),
        };
        assert!(empty_body.validate().is_err());
    }

    #[test]
    fn test_create_comment_validation() {
        let valid = CreateCommentRequest {
            content: "A comment".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = CreateCommentRequest {
            content: String::new(),
        };
        assert!(empty.validate().is_err());

        let too_long = CreateCommentRequest {
            content: "a".repeat(2001),
        };
        assert!(too_long.validate().is_err());
    }
}
