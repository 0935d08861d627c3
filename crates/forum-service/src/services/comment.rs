//! Comment service
//!
//! Handles comment creation and owner-authorized soft deletion.

use forum_core::entities::Comment;
use forum_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a thread
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn add_comment(
        &self,
        user_id: Snowflake,
        thread_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        // The parent thread must exist
        self.ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ThreadNotFound(thread_id)))?;

        let comment = Comment::new(self.ctx.generate_id(), thread_id, user_id, request.content);

        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, thread_id = %thread_id, "Comment added");

        Ok(CommentResponse::from(&comment))
    }

    /// Soft-delete a comment; only the owner may delete
    ///
    /// The row survives with its flag flipped; the ownership check runs
    /// before any mutation, so a rejected delete leaves the flag untouched.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn delete_comment(
        &self,
        user_id: Snowflake,
        thread_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_in_thread(comment_id, thread_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::CommentNotFound(
                comment_id,
            )))?;

        if !comment.is_owned_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotCommentOwner));
        }

        self.ctx.comment_repo().soft_delete(comment.id).await?;

        info!(comment_id = %comment.id, "Comment soft-deleted");

        Ok(())
    }
}
