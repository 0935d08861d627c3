//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub fullname: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Projection for batch username lookups
#[derive(Debug, Clone, FromRow)]
pub struct UsernameModel {
    pub id: i64,
    pub username: String,
}
