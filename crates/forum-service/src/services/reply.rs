//! Reply service
//!
//! Handles reply creation and owner-authorized soft deletion.

use forum_core::entities::Reply;
use forum_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateReplyRequest, ReplyResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reply service
pub struct ReplyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReplyService<'a> {
    /// Create a new ReplyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a reply to a comment
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn add_reply(
        &self,
        user_id: Snowflake,
        thread_id: Snowflake,
        comment_id: Snowflake,
        request: CreateReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        // The parent comment must exist under the given thread
        self.ctx
            .comment_repo()
            .find_in_thread(comment_id, thread_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::CommentNotFound(
                comment_id,
            )))?;

        let reply = Reply::new(self.ctx.generate_id(), comment_id, user_id, request.content);

        self.ctx.reply_repo().create(&reply).await?;

        info!(reply_id = %reply.id, comment_id = %comment_id, "Reply added");

        Ok(ReplyResponse::from(&reply))
    }

    /// Soft-delete a reply; only the owner may delete
    ///
    /// The reply is fetched scoped by its full ancestor chain, so a wrong
    /// comment or thread in the path is a not-found, never a cross-thread
    /// deletion.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn delete_reply(
        &self,
        user_id: Snowflake,
        thread_id: Snowflake,
        comment_id: Snowflake,
        reply_id: Snowflake,
    ) -> ServiceResult<()> {
        let reply = self
            .ctx
            .reply_repo()
            .find_in_comment(reply_id, comment_id, thread_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ReplyNotFound(reply_id)))?;

        if !reply.is_owned_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotReplyOwner));
        }

        self.ctx.reply_repo().soft_delete(reply.id).await?;

        info!(reply_id = %reply.id, "Reply soft-deleted");

        Ok(())
    }
}
