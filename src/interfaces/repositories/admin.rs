use async_trait::async_trait;

use crate::{
    entities::admin::{
        ActiveUser, AdminProjectRow, AdminUserRow, DailyActivity, PopularProject, RoleCount,
        StatusCount,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxAdminRepo,
};

/// Read-only cross-entity reporting, computed on demand. Deletion goes
/// through the regular user/project repositories.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn count_users(&self) -> Result<i64, AppError>;
    async fn users_by_role(&self) -> Result<Vec<RoleCount>, AppError>;
    async fn count_projects(&self) -> Result<i64, AppError>;
    async fn projects_by_status(&self) -> Result<Vec<StatusCount>, AppError>;
    async fn count_likes(&self) -> Result<i64, AppError>;
    async fn count_comments(&self) -> Result<i64, AppError>;
    async fn most_active_users(&self, limit: i64) -> Result<Vec<ActiveUser>, AppError>;
    async fn most_popular_projects(&self, limit: i64) -> Result<Vec<PopularProject>, AppError>;
    /// Creations from users, projects, likes and comments merged into one
    /// per-day series over the trailing `days` days.
    async fn recent_activity(&self, days: i32) -> Result<Vec<DailyActivity>, AppError>;
    async fn list_users(&self) -> Result<Vec<AdminUserRow>, AppError>;
    async fn list_projects(&self) -> Result<Vec<AdminProjectRow>, AppError>;
}

impl SqlxAdminRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAdminRepo { pool }
    }

    async fn count_table(&self, query: &'static str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(query)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(count)
    }
}

#[async_trait]
impl AdminRepository for SqlxAdminRepo {
    async fn count_users(&self) -> Result<i64, AppError> {
        self.count_table("SELECT COUNT(*) FROM users").await
    }

    async fn users_by_role(&self) -> Result<Vec<RoleCount>, AppError> {
        sqlx::query_as::<_, RoleCount>(
            "SELECT role, COUNT(*) AS count FROM users GROUP BY role",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn count_projects(&self) -> Result<i64, AppError> {
        self.count_table("SELECT COUNT(*) FROM projects").await
    }

    async fn projects_by_status(&self) -> Result<Vec<StatusCount>, AppError> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM projects GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn count_likes(&self) -> Result<i64, AppError> {
        self.count_table("SELECT COUNT(*) FROM likes").await
    }

    async fn count_comments(&self) -> Result<i64, AppError> {
        self.count_table("SELECT COUNT(*) FROM comments").await
    }

    async fn most_active_users(&self, limit: i64) -> Result<Vec<ActiveUser>, AppError> {
        sqlx::query_as::<_, ActiveUser>(
            r#"
            SELECT u.id,
                   u.first_name,
                   u.last_name,
                   u.email,
                   u.role,
                   COUNT(DISTINCT p.id) AS projects_count,
                   COUNT(DISTINCT l.id) AS likes_count,
                   COUNT(DISTINCT c.id) AS comments_count
            FROM users u
            LEFT JOIN projects p ON p.owner_id = u.id
            LEFT JOIN likes l ON l.user_id = u.id
            LEFT JOIN comments c ON c.user_id = u.id
            GROUP BY u.id
            ORDER BY (COUNT(DISTINCT p.id) + COUNT(DISTINCT l.id) + COUNT(DISTINCT c.id)) DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn most_popular_projects(&self, limit: i64) -> Result<Vec<PopularProject>, AppError> {
        sqlx::query_as::<_, PopularProject>(
            r#"
            SELECT p.id,
                   p.title,
                   u.first_name,
                   u.last_name,
                   COUNT(DISTINCT l.id) AS likes_count,
                   COUNT(DISTINCT c.id) AS comments_count
            FROM projects p
            JOIN users u ON u.id = p.owner_id
            LEFT JOIN likes l ON l.project_id = p.id
            LEFT JOIN comments c ON c.project_id = p.id
            GROUP BY p.id, u.first_name, u.last_name
            ORDER BY (COUNT(DISTINCT l.id) + COUNT(DISTINCT c.id)) DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn recent_activity(&self, days: i32) -> Result<Vec<DailyActivity>, AppError> {
        sqlx::query_as::<_, DailyActivity>(
            r#"
            SELECT activity.created_at::date AS date, COUNT(*) AS count
            FROM (
                SELECT created_at FROM users
                WHERE created_at >= NOW() - ($1::int * INTERVAL '1 day')
                UNION ALL
                SELECT created_at FROM projects
                WHERE created_at >= NOW() - ($1::int * INTERVAL '1 day')
                UNION ALL
                SELECT created_at FROM likes
                WHERE created_at >= NOW() - ($1::int * INTERVAL '1 day')
                UNION ALL
                SELECT created_at FROM comments
                WHERE created_at >= NOW() - ($1::int * INTERVAL '1 day')
            ) AS activity
            GROUP BY activity.created_at::date
            ORDER BY date DESC
            "#,
        )
        .bind(days)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_users(&self) -> Result<Vec<AdminUserRow>, AppError> {
        sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT u.id,
                   u.first_name,
                   u.last_name,
                   u.email,
                   u.role,
                   u.bio,
                   u.created_at,
                   COUNT(DISTINCT p.id) AS projects_count,
                   COUNT(DISTINCT l.id) AS likes_given,
                   COUNT(DISTINCT c.id) AS comments_count
            FROM users u
            LEFT JOIN projects p ON p.owner_id = u.id
            LEFT JOIN likes l ON l.user_id = u.id
            LEFT JOIN comments c ON c.user_id = u.id
            GROUP BY u.id
            ORDER BY u.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_projects(&self) -> Result<Vec<AdminProjectRow>, AppError> {
        sqlx::query_as::<_, AdminProjectRow>(
            r#"
            SELECT p.*,
                   u.first_name,
                   u.last_name,
                   u.email AS owner_email,
                   COUNT(DISTINCT l.id) AS likes_count,
                   COUNT(DISTINCT c.id) AS comments_count
            FROM projects p
            JOIN users u ON u.id = p.owner_id
            LEFT JOIN likes l ON l.project_id = p.id
            LEFT JOIN comments c ON c.project_id = p.id
            GROUP BY p.id, u.first_name, u.last_name, u.email
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
