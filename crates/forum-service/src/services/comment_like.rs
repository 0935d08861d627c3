//! Comment like service
//!
//! Implements unlike-if-exists-else-like toggle semantics for a
//! (comment, user) pair. Repeated calls alternate state.

use forum_core::entities::CommentLike;
use forum_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment like service
pub struct CommentLikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentLikeService<'a> {
    /// Create a new CommentLikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a like on a comment
    ///
    /// The read-then-write is not atomic; two racing toggles can both read
    /// "not liked". The ON CONFLICT insert underneath makes the loser a
    /// no-op rather than an error.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn toggle_like(
        &self,
        user_id: Snowflake,
        thread_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<()> {
        // The comment must exist under the given thread
        self.ctx
            .comment_repo()
            .find_in_thread(comment_id, thread_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::CommentNotFound(
                comment_id,
            )))?;

        let existing = self
            .ctx
            .comment_like_repo()
            .find(comment_id, user_id)
            .await?;

        if existing.is_some() {
            self.ctx
                .comment_like_repo()
                .delete(comment_id, user_id)
                .await?;
            info!(comment_id = %comment_id, "Comment unliked");
        } else {
            let like = CommentLike::new(self.ctx.generate_id(), comment_id, user_id);
            self.ctx.comment_like_repo().create(&like).await?;
            info!(comment_id = %comment_id, "Comment liked");
        }

        Ok(())
    }
}
