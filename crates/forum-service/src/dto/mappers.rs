//! Entity to DTO mappers
//!
//! Implements conversions from domain entities to response DTOs. Content
//! masking of soft-deleted comments and replies happens here, at read time,
//! via the entities' `visible_content`.

use forum_core::entities::{Comment, Reply, Thread, User};

use super::responses::{
    CommentDetailResponse, CommentResponse, ReplyDetailResponse, ReplyResponse,
    ThreadDetailResponse, ThreadResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            fullname: user.fullname.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Thread Mappers
// ============================================================================

impl From<&Thread> for ThreadResponse {
    fn from(thread: &Thread) -> Self {
        Self {
            id: thread.id.to_string(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            owner_id: thread.owner_id.to_string(),
            created_at: thread.created_at,
        }
    }
}

/// Build the full thread view from its parts
pub fn thread_detail(
    thread: &Thread,
    username: &str,
    comments: Vec<CommentDetailResponse>,
) -> ThreadDetailResponse {
    ThreadDetailResponse {
        id: thread.id.to_string(),
        title: thread.title.clone(),
        body: thread.body.clone(),
        username: username.to_string(),
        created_at: thread.created_at,
        comments,
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            thread_id: comment.thread_id.to_string(),
            owner_id: comment.owner_id.to_string(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

/// Build a comment view for the thread detail; deleted content is masked
pub fn comment_detail(
    comment: &Comment,
    username: &str,
    like_count: i64,
    replies: Vec<ReplyDetailResponse>,
) -> CommentDetailResponse {
    CommentDetailResponse {
        id: comment.id.to_string(),
        username: username.to_string(),
        content: comment.visible_content().to_string(),
        created_at: comment.created_at,
        like_count,
        replies,
    }
}

// ============================================================================
// Reply Mappers
// ============================================================================

impl From<&Reply> for ReplyResponse {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id.to_string(),
            comment_id: reply.comment_id.to_string(),
            owner_id: reply.owner_id.to_string(),
            content: reply.content.clone(),
            created_at: reply.created_at,
        }
    }
}

/// Build a reply view for the thread detail; deleted content is masked
pub fn reply_detail(reply: &Reply, username: &str) -> ReplyDetailResponse {
    ReplyDetailResponse {
        id: reply.id.to_string(),
        username: username.to_string(),
        content: reply.visible_content().to_string(),
        created_at: reply.created_at,
    }
}
