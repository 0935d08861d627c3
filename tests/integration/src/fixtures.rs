//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            password: "secretpassword".to_string(),
            fullname: format!("Test User {suffix}"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Refresh / logout request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Registered user response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// Create thread request
#[derive(Debug, Serialize)]
pub struct CreateThreadRequest {
    pub title: String,
    pub body: String,
}

impl CreateThreadRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Thread {suffix}"),
            body: "Some thread body".to_string(),
        }
    }
}

/// Created thread response
#[derive(Debug, Deserialize)]
pub struct ThreadResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner_id: String,
}

/// Create comment / reply request
#[derive(Debug, Serialize)]
pub struct CreateContentRequest {
    pub content: String,
}

/// Created comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub thread_id: String,
    pub content: String,
}

/// Created reply response
#[derive(Debug, Deserialize)]
pub struct ReplyResponse {
    pub id: String,
    pub comment_id: String,
    pub content: String,
}

/// Thread detail response
#[derive(Debug, Deserialize)]
pub struct ThreadDetailResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

/// Comment inside a thread detail
#[derive(Debug, Deserialize)]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub content: String,
    pub like_count: i64,
    pub replies: Vec<ReplyDetail>,
}

/// Reply inside a thread detail
#[derive(Debug, Deserialize)]
pub struct ReplyDetail {
    pub id: String,
    pub username: String,
    pub content: String,
}
