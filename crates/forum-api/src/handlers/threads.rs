//! Thread handlers
//!
//! Endpoints for creating threads and fetching the aggregated detail view.

use axum::extract::{Path, State};
use axum::Json;
use forum_service::{CreateThreadRequest, ThreadDetailResponse, ThreadResponse, ThreadService};

use crate::extractors::{AuthUser, ThreadIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a new thread
///
/// POST /threads
pub async fn create_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateThreadRequest>,
) -> ApiResult<Created<Json<ThreadResponse>>> {
    let service = ThreadService::new(state.service_context());
    let response = service.create_thread(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get the full thread view with comments and replies
///
/// GET /threads/{thread_id}
pub async fn get_thread(
    State(state): State<AppState>,
    Path(path): Path<ThreadIdPath>,
) -> ApiResult<Json<ThreadDetailResponse>> {
    let thread_id = path.thread_id()?;
    let service = ThreadService::new(state.service_context());
    let response = service.get_thread_detail(thread_id).await?;
    Ok(Json(response))
}
