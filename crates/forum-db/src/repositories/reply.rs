//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Reply;
use forum_core::traits::{RepoResult, ReplyRepository};
use forum_core::value_objects::Snowflake;

use crate::models::ReplyModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self))]
    async fn find_in_comment(
        &self,
        reply_id: Snowflake,
        comment_id: Snowflake,
        thread_id: Snowflake,
    ) -> RepoResult<Option<Reply>> {
        // The join enforces the full ancestor chain: reply -> comment -> thread
        let result = sqlx::query_as::<_, ReplyModel>(
            r"
            SELECT r.id, r.comment_id, r.owner_id, r.content, r.created_at, r.is_deleted
            FROM replies r
            JOIN comments c ON c.id = r.comment_id
            WHERE r.id = $1 AND r.comment_id = $2 AND c.thread_id = $3
            ",
        )
        .bind(reply_id.into_inner())
        .bind(comment_id.into_inner())
        .bind(thread_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reply::from))
    }

    #[instrument(skip(self))]
    async fn find_by_comments(&self, comment_ids: &[Snowflake]) -> RepoResult<Vec<Reply>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = comment_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, ReplyModel>(
            r"
            SELECT id, comment_id, owner_id, content, created_at, is_deleted
            FROM replies
            WHERE comment_id = ANY($1)
            ORDER BY created_at, id
            ",
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reply::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, reply: &Reply) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO replies (id, comment_id, owner_id, content, created_at, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(reply.id.into_inner())
        .bind(reply.comment_id.into_inner())
        .bind(reply.owner_id.into_inner())
        .bind(&reply.content)
        .bind(reply.created_at)
        .bind(reply.is_deleted)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE replies SET is_deleted = TRUE WHERE id = $1
            ",
        )
        .bind(id.into_inner())
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
        assert_send_sync::<PgReplyRepository>();
    }
}
