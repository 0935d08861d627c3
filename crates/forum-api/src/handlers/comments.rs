//! Comment handlers
//!
//! Endpoints for adding and soft-deleting comments on a thread.

use axum::extract::{Path, State};
use axum::Json;
use forum_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{AuthUser, CommentPath, ThreadIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Add a comment to a thread
///
/// POST /threads/{thread_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ThreadIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let thread_id = path.thread_id()?;
    let service = CommentService::new(state.service_context());
    let response = service.add_comment(auth.user_id, thread_id, request).await?;
    Ok(Created(Json(response)))
}

/// Soft-delete a comment (owner only)
///
/// DELETE /threads/{thread_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
) -> ApiResult<NoContent> {
    let thread_id = path.thread_id()?;
    let comment_id = path.comment_id()?;
    let service = CommentService::new(state.service_context());
    service
        .delete_comment(auth.user_id, thread_id, comment_id)
        .await?;
    Ok(NoContent)
}
