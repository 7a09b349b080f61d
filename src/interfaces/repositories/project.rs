use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::project::{
        OwnedProject, ProjectDetail, ProjectFilters, ProjectInsert, ProjectPatch, ProjectSort,
        ProjectStatus, ProjectSummary,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, project: &ProjectInsert) -> Result<Uuid, AppError>;
    /// Published projects only, enriched with owner fields and live counts.
    async fn get_all(&self, filters: &ProjectFilters) -> Result<Vec<ProjectSummary>, AppError>;
    /// Mirrors [`ProjectRepository::get_all`]'s predicate, minus sort and
    /// pagination.
    async fn count(&self, filters: &ProjectFilters) -> Result<i64, AppError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<ProjectDetail>, AppError>;
    /// All of a user's projects regardless of status, newest first.
    async fn find_by_user_id(
        &self,
        user_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<OwnedProject>, AppError>;
    /// Applies only the fields the patch carries. Returns false when the
    /// patch is empty or no row matched.
    async fn update_project(&self, id: &Uuid, patch: &ProjectPatch) -> Result<bool, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError>;
    async fn increment_views(&self, id: &Uuid) -> Result<(), AppError>;
    async fn owner_id(&self, id: &Uuid) -> Result<Option<Uuid>, AppError>;
    async fn project_exists(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

/// Shared WHERE fragment so the listing and its total count can never
/// disagree on which rows qualify.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &ProjectFilters) {
    if let Some(category) = filters.category {
        builder.push(" AND p.category = ").push_bind(category);
    }
    if let Some(location) = &filters.location {
        builder.push(" AND p.location ILIKE ").push_bind(format!("%{}%", location));
    }
    if let Some(search) = &filters.search {
        let pattern = format!("%{}%", search);
        builder.push(" AND (p.title ILIKE ").push_bind(pattern.clone());
        builder.push(" OR p.description ILIKE ").push_bind(pattern);
        builder.push(")");
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create_project(&self, project: &ProjectInsert) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO projects (
                title,
                description,
                category,
                location,
                external_link,
                main_image,
                gallery_images,
                status,
                owner_id,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.category)
        .bind(&project.location)
        .bind(&project.external_link)
        .bind(&project.main_image)
        .bind(&project.gallery_images)
        .bind(project.status)
        .bind(project.owner_id)
        .bind(project.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(id)
    }

    async fn get_all(&self, filters: &ProjectFilters) -> Result<Vec<ProjectSummary>, AppError> {
        let mut builder = QueryBuilder::new(
            "SELECT p.*, \
                    u.first_name, u.last_name, u.profile_photo AS author_photo, \
                    COUNT(DISTINCT l.id) AS likes_count, \
                    COUNT(DISTINCT c.id) AS comments_count \
             FROM projects p \
             JOIN users u ON u.id = p.owner_id \
             LEFT JOIN likes l ON l.project_id = p.id \
             LEFT JOIN comments c ON c.project_id = p.id \
             WHERE p.status = ",
        );
        builder.push_bind(ProjectStatus::Published);
        push_filters(&mut builder, filters);

        builder.push(" GROUP BY p.id, u.first_name, u.last_name, u.profile_photo");

        match filters.sort {
            ProjectSort::Popular => {
                builder.push(" ORDER BY likes_count DESC, p.view_count DESC");
            }
            ProjectSort::Oldest => {
                builder.push(" ORDER BY p.created_at ASC");
            }
            ProjectSort::Recent => {
                builder.push(" ORDER BY p.created_at DESC");
            }
        }

        builder.push(" LIMIT ").push_bind(filters.limit());
        builder.push(" OFFSET ").push_bind(filters.offset());

        let projects = builder
            .build_query_as::<ProjectSummary>()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(projects)
    }

    async fn count(&self, filters: &ProjectFilters) -> Result<i64, AppError> {
        let mut builder =
            QueryBuilder::new("SELECT COUNT(*) FROM projects p WHERE p.status = ");
        builder.push_bind(ProjectStatus::Published);
        push_filters(&mut builder, filters);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(total)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<ProjectDetail>, AppError> {
        sqlx::query_as::<_, ProjectDetail>(
            r#"
            SELECT p.*,
                   u.first_name,
                   u.last_name,
                   u.email AS owner_email,
                   u.bio AS owner_bio,
                   u.profile_photo AS author_photo,
                   u.linkedin,
                   u.twitter,
                   u.website,
                   (SELECT COUNT(*) FROM likes WHERE project_id = p.id) AS likes_count,
                   (SELECT COUNT(*) FROM comments WHERE project_id = p.id) AS comments_count
            FROM projects p
            JOIN users u ON u.id = p.owner_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn find_by_user_id(
        &self,
        user_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<OwnedProject>, AppError> {
        sqlx::query_as::<_, OwnedProject>(
            r#"
            SELECT p.*,
                   (SELECT COUNT(*) FROM likes WHERE project_id = p.id) AS likes_count,
                   (SELECT COUNT(*) FROM comments WHERE project_id = p.id) AS comments_count
            FROM projects p
            WHERE p.owner_id = $1
            ORDER BY p.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update_project(&self, id: &Uuid, patch: &ProjectPatch) -> Result<bool, AppError> {
        if patch.is_empty() {
            return Ok(false);
        }

        let mut builder = QueryBuilder::new("UPDATE projects SET ");
        let mut fields = builder.separated(", ");

        if let Some(title) = &patch.title {
            fields.push("title = ").push_bind_unseparated(title);
        }
        if let Some(description) = &patch.description {
            fields.push("description = ").push_bind_unseparated(description);
        }
        if let Some(category) = patch.category {
            fields.push("category = ").push_bind_unseparated(category);
        }
        match patch.location.as_ref_option() {
            None => {}
            Some(None) => {
                fields.push("location = NULL");
            }
            Some(Some(location)) => {
                fields.push("location = ").push_bind_unseparated(location);
            }
        }
        match patch.external_link.as_ref_option() {
            None => {}
            Some(None) => {
                fields.push("external_link = NULL");
            }
            Some(Some(link)) => {
                fields.push("external_link = ").push_bind_unseparated(link);
            }
        }
        if let Some(status) = patch.status {
            fields.push("status = ").push_bind_unseparated(status);
        }
        if let Some(main_image) = &patch.main_image {
            fields.push("main_image = ").push_bind_unseparated(main_image);
        }
        if let Some(gallery_images) = &patch.gallery_images {
            fields.push("gallery_images = ").push_bind_unseparated(gallery_images);
        }

        builder.push(" WHERE id = ").push_bind(id);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_views(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE projects SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn owner_id(&self, id: &Uuid) -> Result<Option<Uuid>, AppError> {
        sqlx::query_scalar("SELECT owner_id FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn project_exists(&self, id: &Uuid) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::from)?;

        Ok(exists)
    }
}
