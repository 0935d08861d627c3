//! PostgreSQL implementation of ThreadRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Thread;
use forum_core::traits::{RepoResult, ThreadRepository};
use forum_core::value_objects::Snowflake;

use crate::models::ThreadModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Thread>> {
        let result = sqlx::query_as::<_, ThreadModel>(
            r"
            SELECT id, title, body, owner_id, created_at
            FROM threads
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Thread::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, thread: &Thread) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO threads (id, title, body, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(thread.id.into_inner())
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(thread.owner_id.into_inner())
        .bind(thread.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgThreadRepository>();
    }
}
