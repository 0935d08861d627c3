//! Reply handlers
//!
//! Endpoints for adding and soft-deleting replies to a comment.

use axum::extract::{Path, State};
use axum::Json;
use forum_service::{CreateReplyRequest, ReplyResponse, ReplyService};

use crate::extractors::{AuthUser, CommentPath, ReplyPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Add a reply to a comment
///
/// POST /threads/{thread_id}/comments/{comment_id}/replies
pub async fn add_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
    ValidatedJson(request): ValidatedJson<CreateReplyRequest>,
) -> ApiResult<Created<Json<ReplyResponse>>> {
    let thread_id = path.thread_id()?;
    let comment_id = path.comment_id()?;
    let service = ReplyService::new(state.service_context());
    let response = service
        .add_reply(auth.user_id, thread_id, comment_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Soft-delete a reply (owner only)
///
/// DELETE /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}
pub async fn delete_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReplyPath>,
) -> ApiResult<NoContent> {
    let thread_id = path.thread_id()?;
    let comment_id = path.comment_id()?;
    let reply_id = path.reply_id()?;
    let service = ReplyService::new(state.service_context());
    service
        .delete_reply(auth.user_id, thread_id, comment_id, reply_id)
        .await?;
    Ok(NoContent)
}
