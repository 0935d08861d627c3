//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Thread not found: {0}")]
    ThreadNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Reply not found: {0}")]
    ReplyNotFound(Snowflake),

    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Title too long: max {max} characters")]
    TitleTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not comment owner")]
    NotCommentOwner,

    #[error("Not reply owner")]
    NotReplyOwner,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ThreadNotFound(_) => "UNKNOWN_THREAD",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",
            Self::RefreshTokenNotFound => "UNKNOWN_REFRESH_TOKEN",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UsernameTaken(_) => "USERNAME_TAKEN",
            Self::TitleTooLong { .. } => "TITLE_TOO_LONG",

            // Authorization
            Self::NotCommentOwner => "NOT_COMMENT_OWNER",
            Self::NotReplyOwner => "NOT_REPLY_OWNER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ThreadNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ReplyNotFound(_)
                | Self::RefreshTokenNotFound
        )
    }

    /// Check if this is a validation error
    ///
    /// A taken username counts as validation so it surfaces as 400, matching
    /// the registration contract.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::UsernameTaken(_) | Self::TitleTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotCommentOwner | Self::NotReplyOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ThreadNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_THREAD");

        let err = DomainError::NotCommentOwner;
        assert_eq!(err.code(), "NOT_COMMENT_OWNER");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ThreadNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::RefreshTokenNotFound.is_not_found());
        assert!(!DomainError::NotReplyOwner.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::UsernameTaken("johndoe".to_string()).is_validation());
        assert!(DomainError::TitleTooLong { max: 255 }.is_validation());
        assert!(!DomainError::CommentNotFound(Snowflake::new(1)).is_validation());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotCommentOwner.is_authorization());
        assert!(DomainError::NotReplyOwner.is_authorization());
        assert!(!DomainError::UserNotFound(Snowflake::new(1)).is_authorization());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ThreadNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Thread not found: 123");

        let err = DomainError::TitleTooLong { max: 255 };
        assert_eq!(err.to_string(), "Title too long: max 255 characters");
    }
}
