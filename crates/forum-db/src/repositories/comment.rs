//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Comment;
use forum_core::traits::{CommentRepository, RepoResult};
use forum_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_in_thread(
        &self,
        comment_id: Snowflake,
        thread_id: Snowflake,
    ) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, thread_id, owner_id, content, created_at, is_deleted
            FROM comments
            WHERE id = $1 AND thread_id = $2
            ",
        )
        .bind(comment_id.into_inner())
        .bind(thread_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_thread(&self, thread_id: Snowflake) -> RepoResult<Vec<Comment>> {
        // Soft-deleted rows are returned too; masking is a read-time concern
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, thread_id, owner_id, content, created_at, is_deleted
            FROM comments
            WHERE thread_id = $1
            ORDER BY created_at, id
            ",
        )
        .bind(thread_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, thread_id, owner_id, content, created_at, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.thread_id.into_inner())
        .bind(comment.owner_id.into_inner())
        .bind(&comment.content)
        .bind(comment.created_at)
        .bind(comment.is_deleted)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE comments SET is_deleted = TRUE WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
