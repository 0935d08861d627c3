//! PostgreSQL implementation of CommentLikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::CommentLike;
use forum_core::traits::{CommentLikeRepository, RepoResult};
use forum_core::value_objects::Snowflake;

use crate::models::{CommentLikeCountModel, CommentLikeModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CommentLikeRepository
#[derive(Clone)]
pub struct PgCommentLikeRepository {
    pool: PgPool,
}

impl PgCommentLikeRepository {
    /// Create a new PgCommentLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentLikeRepository for PgCommentLikeRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<CommentLike>> {
        let result = sqlx::query_as::<_, CommentLikeModel>(
            r"
            SELECT id, comment_id, user_id, created_at
            FROM comment_likes
            WHERE comment_id = $1 AND user_id = $2
            ",
        )
        .bind(comment_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CommentLike::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, like: &CommentLike) -> RepoResult<()> {
        // Two racing toggles can both observe "not liked"; DO NOTHING turns
        // the losing insert into a no-op instead of a unique violation
        sqlx::query(
            r"
            INSERT INTO comment_likes (id, comment_id, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (comment_id, user_id) DO NOTHING
            ",
        )
        .bind(like.id.into_inner())
        .bind(like.comment_id.into_inner())
        .bind(like.user_id.into_inner())
        .bind(like.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, comment_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM comment_likes WHERE comment_id = $1 AND user_id = $2
            ",
        )
        .bind(comment_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_comments(
        &self,
        comment_ids: &[Snowflake],
    ) -> RepoResult<Vec<(Snowflake, i64)>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = comment_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, CommentLikeCountModel>(
            r"
            SELECT comment_id, COUNT(*) as count
            FROM comment_likes
            WHERE comment_id = ANY($1)
            GROUP BY comment_id
            ",
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|r| (Snowflake::new(r.comment_id), r.count))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentLikeRepository>();
    }
}
