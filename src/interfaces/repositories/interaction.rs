use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::interaction::{CommentView, Liker},
    errors::AppError,
    repositories::sqlx_repo::SqlxInteractionRepo,
};

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    async fn has_liked(&self, user_id: &Uuid, project_id: &Uuid) -> Result<bool, AppError>;
    /// Inserts the like unless the (user, project) pair already exists.
    /// Returns false on the already-liked no-op, so a concurrent double
    /// toggle cannot surface a conflict.
    async fn insert_like(&self, user_id: &Uuid, project_id: &Uuid) -> Result<bool, AppError>;
    async fn delete_like(&self, user_id: &Uuid, project_id: &Uuid) -> Result<bool, AppError>;
    async fn count_likes(&self, project_id: &Uuid) -> Result<i64, AppError>;
    async fn likers(&self, project_id: &Uuid) -> Result<Vec<Liker>, AppError>;
    async fn insert_comment(
        &self,
        project_id: &Uuid,
        user_id: &Uuid,
        content: &str,
    ) -> Result<Uuid, AppError>;
    async fn get_comments(
        &self,
        project_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CommentView>, AppError>;
    async fn count_comments(&self, project_id: &Uuid) -> Result<i64, AppError>;
    async fn comment_author(&self, comment_id: &Uuid) -> Result<Option<Uuid>, AppError>;
    async fn delete_comment(&self, comment_id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxInteractionRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxInteractionRepo { pool }
    }
}

#[async_trait]
impl InteractionRepository for SqlxInteractionRepo {
    async fn has_liked(&self, user_id: &Uuid, project_id: &Uuid) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE user_id = $1 AND project_id = $2)",
        )
        .bind(user_id)
        .bind(project_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(exists)
    }

    async fn insert_like(&self, user_id: &Uuid, project_id: &Uuid) -> Result<bool, AppError> {
        // The unique index on (user_id, project_id) makes the race between
        // two concurrent toggles a silent no-op rather than an error.
        let result = sqlx::query(
            "INSERT INTO likes (user_id, project_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, project_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(project_id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_like(&self, user_id: &Uuid, project_id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND project_id = $2")
            .bind(user_id)
            .bind(project_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_likes(&self, project_id: &Uuid) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(count)
    }

    async fn likers(&self, project_id: &Uuid) -> Result<Vec<Liker>, AppError> {
        sqlx::query_as::<_, Liker>(
            r#"
            SELECT u.id, u.first_name, u.last_name, u.profile_photo, l.created_at AS liked_at
            FROM likes l
            JOIN users u ON u.id = l.user_id
            WHERE l.project_id = $1
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn insert_comment(
        &self,
        project_id: &Uuid,
        user_id: &Uuid,
        content: &str,
    ) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO comments (project_id, user_id, content) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(project_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(id)
    }

    async fn get_comments(
        &self,
        project_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CommentView>, AppError> {
        sqlx::query_as::<_, CommentView>(
            r#"
            SELECT c.*, u.first_name, u.last_name, u.profile_photo AS author_photo
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.project_id = $1
            ORDER BY c.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(project_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn count_comments(&self, project_id: &Uuid) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::from)?;

        Ok(count)
    }

    async fn comment_author(&self, comment_id: &Uuid) -> Result<Option<Uuid>, AppError> {
        sqlx::query_scalar("SELECT user_id FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn delete_comment(&self, comment_id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
