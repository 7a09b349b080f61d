use uuid::Uuid;
use validator::Validate;

use crate::entities::interaction::CommentView;
use crate::entities::project::{
    NewProjectRequest, OwnedProject, Pagination, ProjectDetail, ProjectDetailResponse,
    ProjectFilters, ProjectPatch, ProjectSummary,
};
use crate::errors::AppError;
use crate::repositories::interaction::InteractionRepository;
use crate::repositories::project::ProjectRepository;

const COMMENT_PREVIEW_LIMIT: i64 = 50;

pub struct ProjectHandler<R, I>
where
    R: ProjectRepository,
    I: InteractionRepository,
{
    pub project_repo: R,
    pub interaction_repo: I,
}

impl<R, I> ProjectHandler<R, I>
where
    R: ProjectRepository,
    I: InteractionRepository,
{
    pub fn new(project_repo: R, interaction_repo: I) -> Self {
        ProjectHandler {
            project_repo,
            interaction_repo,
        }
    }

    /// Creates a project for its owner and returns it fully enriched.
    pub async fn create(
        &self,
        owner_id: Uuid,
        request: NewProjectRequest,
        main_image: Option<String>,
        gallery_images: Vec<String>,
    ) -> Result<ProjectDetail, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert(owner_id, main_image, gallery_images);
        let id = self.project_repo.create_project(&insert).await?;

        tracing::info!("project {} created by {}", id, owner_id);

        self.project_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::InternalError("Project vanished after insert".to_string()))
    }

    /// Public listing: published projects only, filtered, sorted, paginated.
    pub async fn list(
        &self,
        filters: &ProjectFilters,
    ) -> Result<(Vec<ProjectSummary>, Pagination), AppError> {
        let projects = self.project_repo.get_all(filters).await?;
        let total = self.project_repo.count(filters).await?;

        let pagination = Pagination::new(total, filters.limit(), filters.offset());
        Ok((projects, pagination))
    }

    /// Project detail with live counts, the viewer's like state and the
    /// latest comments. Each successful fetch bumps the view counter as a
    /// side effect; the read and the increment are deliberately not atomic.
    pub async fn detail(
        &self,
        id: &Uuid,
        viewer: Option<Uuid>,
    ) -> Result<(ProjectDetailResponse, Vec<CommentView>), AppError> {
        let detail = self
            .project_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        if let Err(e) = self.project_repo.increment_views(id).await {
            tracing::warn!("failed to increment views for {}: {}", id, e);
        }

        let has_liked = match viewer {
            Some(user_id) => self.interaction_repo.has_liked(&user_id, id).await?,
            None => false,
        };

        let comments = self
            .interaction_repo
            .get_comments(id, COMMENT_PREVIEW_LIMIT, 0)
            .await?;

        Ok((ProjectDetailResponse { detail, has_liked }, comments))
    }

    /// A user's projects regardless of status, for profile display.
    pub async fn by_user(
        &self,
        user_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<OwnedProject>, AppError> {
        self.project_repo.find_by_user_id(user_id, limit, offset).await
    }

    /// Owner-gated partial update.
    pub async fn update(
        &self,
        id: &Uuid,
        caller_id: &Uuid,
        patch: ProjectPatch,
    ) -> Result<ProjectDetail, AppError> {
        self.check_ownership(id, caller_id).await?;

        patch.validate()?;
        if patch.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        let updated = self.project_repo.update_project(id, &patch).await?;
        if !updated {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        self.project_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// Owner-gated hard delete.
    pub async fn delete(&self, id: &Uuid, caller_id: &Uuid) -> Result<(), AppError> {
        self.check_ownership(id, caller_id).await?;

        let deleted = self.project_repo.delete_project(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        tracing::info!("project {} deleted by {}", id, caller_id);
        Ok(())
    }

    async fn check_ownership(&self, id: &Uuid, caller_id: &Uuid) -> Result<(), AppError> {
        let owner = self
            .project_repo
            .owner_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        if owner != *caller_id {
            return Err(AppError::ForbiddenAccess);
        }
        Ok(())
    }
}
