//! Thread service
//!
//! Handles thread creation and the thread detail aggregation: a thread with
//! all its comments (soft-deleted ones masked) and their nested replies.

use std::collections::HashMap;

use forum_core::entities::{Thread, MAX_TITLE_LEN};
use forum_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::mappers::{comment_detail, reply_detail, thread_detail};
use crate::dto::{CreateThreadRequest, ReplyDetailResponse, ThreadDetailResponse, ThreadResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Fallback for owner rows that can no longer be resolved
const UNKNOWN_USERNAME: &str = "unknown";

/// Thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new thread
    #[instrument(skip(self, request), fields(owner_id = %owner_id))]
    pub async fn create_thread(
        &self,
        owner_id: Snowflake,
        request: CreateThreadRequest,
    ) -> ServiceResult<ThreadResponse> {
        if request.title.chars().count() > MAX_TITLE_LEN {
            return Err(ServiceError::Domain(DomainError::TitleTooLong {
                max: MAX_TITLE_LEN,
            }));
        }

        let thread = Thread::new(
            self.ctx.generate_id(),
            request.title,
            request.body,
            owner_id,
        );

        self.ctx.thread_repo().create(&thread).await?;

        info!(thread_id = %thread.id, "Thread created");

        Ok(ThreadResponse::from(&thread))
    }

    /// Get the full thread view: comments in insertion order, each with its
    /// replies grouped under it, soft-deleted content masked
    #[instrument(skip(self))]
    pub async fn get_thread_detail(&self, thread_id: Snowflake) -> ServiceResult<ThreadDetailResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ThreadNotFound(thread_id)))?;

        let comments = self.ctx.comment_repo().find_by_thread(thread.id).await?;

        // A thread with no comments never issues the replies / like queries
        let (replies, like_counts) = if comments.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            let comment_ids: Vec<Snowflake> = comments.iter().map(|c| c.id).collect();
            (
                self.ctx.reply_repo().find_by_comments(&comment_ids).await?,
                self.ctx
                    .comment_like_repo()
                    .count_by_comments(&comment_ids)
                    .await?,
            )
        };

        // Resolve every referenced owner in one batch
        let mut owner_ids: Vec<Snowflake> = Vec::with_capacity(1 + comments.len() + replies.len());
        owner_ids.push(thread.owner_id);
        owner_ids.extend(comments.iter().map(|c| c.owner_id));
        owner_ids.extend(replies.iter().map(|r| r.owner_id));
        owner_ids.sort_unstable();
        owner_ids.dedup();

        let usernames: HashMap<Snowflake, String> = self
            .ctx
            .user_repo()
            .find_usernames(&owner_ids)
            .await?
            .into_iter()
            .collect();
        let username_of =
            |id: Snowflake| usernames.get(&id).map_or(UNKNOWN_USERNAME, String::as_str);

        // Group replies by parent comment, preserving storage order
        let mut grouped: HashMap<Snowflake, Vec<ReplyDetailResponse>> = HashMap::new();
        for reply in &replies {
            grouped
                .entry(reply.comment_id)
                .or_default()
                .push(reply_detail(reply, username_of(reply.owner_id)));
        }

        let likes: HashMap<Snowflake, i64> = like_counts.into_iter().collect();

        let comment_views = comments
            .iter()
            .map(|comment| {
                comment_detail(
                    comment,
                    username_of(comment.owner_id),
                    likes.get(&comment.id).copied().unwrap_or(0),
                    grouped.remove(&comment.id).unwrap_or_default(),
                )
            })
            .collect();

        Ok(thread_detail(
            &thread,
            username_of(thread.owner_id),
            comment_views,
        ))
    }
}
