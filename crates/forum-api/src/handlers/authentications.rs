//! Authentication handlers
//!
//! Endpoints for login, token refresh, and logout.

use axum::{extract::State, Json};
use forum_service::{
    AuthResponse, AuthService, LoginRequest, LogoutRequest, RefreshTokenRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Login with username and password
///
/// POST /authentications
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Created(Json(response)))
}

/// Refresh the token pair
///
/// PUT /authentications
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}

/// Logout by revoking a refresh token
///
/// DELETE /authentications
pub async fn logout(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LogoutRequest>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.logout(request).await?;
    Ok(NoContent)
}
