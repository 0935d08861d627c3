//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Comment, CommentLike, RefreshToken, Reply, Thread, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user with the given password hash
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for credential verification
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Resolve usernames for a set of user IDs
    ///
    /// Returns one `(id, username)` pair per ID that exists.
    async fn find_usernames(&self, ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, String)>>;
}

// ============================================================================
// Authentication Repository (refresh token store)
// ============================================================================

#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    /// Persist an issued refresh token for later revocation checks
    ///
    /// `record` carries the bookkeeping; the token itself is passed
    /// separately so implementations can store a digest instead.
    async fn store(&self, record: &RefreshToken, token: &str) -> RepoResult<()>;

    /// Look up the stored record for a token, revoked or not
    async fn find(&self, token: &str) -> RepoResult<Option<RefreshToken>>;

    /// Revoke a stored token; returns false if no live row matched
    async fn revoke(&self, token: &str) -> RepoResult<bool>;

    /// Revoke every live token belonging to a user
    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Thread Repository
// ============================================================================

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find thread by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Thread>>;

    /// Create a new thread
    async fn create(&self, thread: &Thread) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment scoped to its parent thread
    async fn find_in_thread(
        &self,
        comment_id: Snowflake,
        thread_id: Snowflake,
    ) -> RepoResult<Option<Comment>>;

    /// List all comments of a thread in insertion order, including
    /// soft-deleted ones
    async fn find_by_thread(&self, thread_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Flip the soft-delete flag; the row is never removed
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Find a reply scoped to its full ancestor chain (comment and thread)
    async fn find_in_comment(
        &self,
        reply_id: Snowflake,
        comment_id: Snowflake,
        thread_id: Snowflake,
    ) -> RepoResult<Option<Reply>>;

    /// List all replies whose parent comment is in the given set, in
    /// insertion order, including soft-deleted ones
    async fn find_by_comments(&self, comment_ids: &[Snowflake]) -> RepoResult<Vec<Reply>>;

    /// Create a new reply
    async fn create(&self, reply: &Reply) -> RepoResult<()>;

    /// Flip the soft-delete flag; the row is never removed
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Like Repository
// ============================================================================

#[async_trait]
pub trait CommentLikeRepository: Send + Sync {
    /// Find the like row for a (comment, user) pair
    async fn find(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<CommentLike>>;

    /// Insert a like; a concurrent duplicate insert is a no-op, the unique
    /// (comment_id, user_id) constraint is the backstop
    async fn create(&self, like: &CommentLike) -> RepoResult<()>;

    /// Remove the like row for a (comment, user) pair
    async fn delete(&self, comment_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;

    /// Count likes per comment for a set of comments
    async fn count_by_comments(
        &self,
        comment_ids: &[Snowflake],
    ) -> RepoResult<Vec<(Snowflake, i64)>>;
}
