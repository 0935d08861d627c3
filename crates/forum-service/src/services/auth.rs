//! Authentication service
//!
//! Handles login, token refresh, and logout. Issued refresh tokens are
//! persisted (the authentications table) so they can be revoked; refresh
//! rotates the pair, revoking the old token.

use chrono::{Duration, Utc};
use forum_common::auth::verify_password;
use forum_common::AppError;
use forum_core::entities::RefreshToken;
use forum_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, LogoutRequest, RefreshTokenRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Unknown user and wrong password are indistinguishable to the caller
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");

        self.issue_tokens(user.id).await
    }

    /// Refresh the token pair using a valid refresh token
    ///
    /// The old refresh token is revoked and a new pair is issued.
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        // Signature/expiry problems are authentication failures (401)
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        // A token missing from the store (or revoked/expired server-side)
        // was never issued or is already dead; that is a not-found (404)
        let record = self
            .ctx
            .authentication_repo()
            .find(&request.refresh_token)
            .await?
            .filter(RefreshToken::is_valid)
            .ok_or(ServiceError::Domain(DomainError::RefreshTokenNotFound))?;

        if claims.user_id()? != record.user_id {
            return Err(ServiceError::App(AppError::InvalidToken));
        }
        let user_id = record.user_id;

        self.ctx
            .authentication_repo()
            .revoke(&request.refresh_token)
            .await?;

        info!(user_id = %user_id, "Tokens refreshed");

        self.issue_tokens(user_id).await
    }

    /// Logout by revoking the given refresh token
    #[instrument(skip(self, request))]
    pub async fn logout(&self, request: LogoutRequest) -> ServiceResult<()> {
        let revoked = self
            .ctx
            .authentication_repo()
            .revoke(&request.refresh_token)
            .await?;

        if !revoked {
            return Err(ServiceError::Domain(DomainError::RefreshTokenNotFound));
        }

        info!("User logged out");
        Ok(())
    }

    /// Generate a token pair and persist the refresh half
    async fn issue_tokens(&self, user_id: forum_core::Snowflake) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user_id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let record = RefreshToken::new(
            self.ctx.generate_id(),
            user_id,
            Utc::now() + Duration::seconds(self.ctx.jwt_service().refresh_token_expiry()),
        );

        self.ctx
            .authentication_repo()
            .store(&record, &token_pair.refresh_token)
            .await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
        ))
    }
}
