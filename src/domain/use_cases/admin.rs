use uuid::Uuid;

use crate::entities::admin::{
    AdminProjectRow, AdminUserRow, InteractionStats, ProjectStats, Statistics, UserStats,
};
use crate::errors::AppError;
use crate::repositories::admin::AdminRepository;
use crate::repositories::project::ProjectRepository;
use crate::repositories::user::UserRepository;

const TOP_LIMIT: i64 = 10;
const ACTIVITY_WINDOW_DAYS: i32 = 30;

/// Admin reporting and moderation. Deletion reuses the same primitives the
/// regular flows use, behind the admin role gate.
pub struct AdminHandler<A, U, P>
where
    A: AdminRepository,
    U: UserRepository,
    P: ProjectRepository,
{
    pub admin_repo: A,
    pub user_repo: U,
    pub project_repo: P,
}

impl<A, U, P> AdminHandler<A, U, P>
where
    A: AdminRepository,
    U: UserRepository,
    P: ProjectRepository,
{
    pub fn new(admin_repo: A, user_repo: U, project_repo: P) -> Self {
        AdminHandler {
            admin_repo,
            user_repo,
            project_repo,
        }
    }

    /// The full dashboard payload, computed on demand.
    pub async fn statistics(&self) -> Result<Statistics, AppError> {
        let users = UserStats {
            total: self.admin_repo.count_users().await?,
            by_role: self.admin_repo.users_by_role().await?,
        };
        let projects = ProjectStats {
            total: self.admin_repo.count_projects().await?,
            by_status: self.admin_repo.projects_by_status().await?,
        };
        let interactions = InteractionStats {
            likes: self.admin_repo.count_likes().await?,
            comments: self.admin_repo.count_comments().await?,
        };

        Ok(Statistics {
            users,
            projects,
            interactions,
            active_users: self.admin_repo.most_active_users(TOP_LIMIT).await?,
            popular_projects: self.admin_repo.most_popular_projects(TOP_LIMIT).await?,
            recent_activity: self.admin_repo.recent_activity(ACTIVITY_WINDOW_DAYS).await?,
        })
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUserRow>, AppError> {
        self.admin_repo.list_users().await
    }

    pub async fn list_projects(&self) -> Result<Vec<AdminProjectRow>, AppError> {
        self.admin_repo.list_projects().await
    }

    /// Removes a user. An admin can never remove their own account through
    /// this path.
    pub async fn delete_user(&self, id: &Uuid, caller_id: &Uuid) -> Result<(), AppError> {
        if id == caller_id {
            return Err(AppError::InvalidInput(
                "You cannot delete your own account".to_string(),
            ));
        }

        let deleted = self.user_repo.delete_user(id).await?;
        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("user {} deleted by admin {}", id, caller_id);
        Ok(())
    }

    pub async fn delete_project(&self, id: &Uuid, caller_id: &Uuid) -> Result<(), AppError> {
        let deleted = self.project_repo.delete_project(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        tracing::info!("project {} deleted by admin {}", id, caller_id);
        Ok(())
    }
}
