//! Comment like handlers
//!
//! Endpoint for toggling a like on a comment.

use axum::extract::{Path, State};
use forum_service::CommentLikeService;

use crate::extractors::{AuthUser, CommentPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Toggle a like on a comment: like if absent, unlike if present
///
/// PUT /threads/{thread_id}/comments/{comment_id}/likes
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
) -> ApiResult<NoContent> {
    let thread_id = path.thread_id()?;
    let comment_id = path.comment_id()?;
    let service = CommentLikeService::new(state.service_context());
    service
        .toggle_like(auth.user_id, thread_id, comment_id)
        .await?;
    Ok(NoContent)
}
