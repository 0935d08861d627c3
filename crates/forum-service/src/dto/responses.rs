//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Authentication Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl AuthResponse {
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Registered user response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub fullname: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Thread Responses
// ============================================================================

/// Created thread response
#[derive(Debug, Clone, Serialize)]
pub struct ThreadResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

/// Full thread view with comments and nested replies
///
/// Soft-deleted comments and replies are present in the lists with their
/// content replaced by the fixed placeholder.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetailResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentDetailResponse>,
}

/// Comment as shown inside a thread detail view
#[derive(Debug, Clone, Serialize)]
pub struct CommentDetailResponse {
    pub id: String,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub replies: Vec<ReplyDetailResponse>,
}

/// Reply as shown inside a thread detail view
#[derive(Debug, Clone, Serialize)]
pub struct ReplyDetailResponse {
    pub id: String,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Comment / Reply Responses
// ============================================================================

/// Created comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub thread_id: String,
    pub owner_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Created reply response
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub id: String,
    pub comment_id: String,
    pub owner_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn ready(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ready" } else { "not_ready" },
            database: if db_healthy { "up" } else { "down" },
        }
    }
}
