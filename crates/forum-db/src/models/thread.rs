//! Thread database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for threads table
#[derive(Debug, Clone, FromRow)]
pub struct ThreadModel {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}
