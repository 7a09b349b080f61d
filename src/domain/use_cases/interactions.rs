use uuid::Uuid;

use crate::entities::interaction::{
    CommentView, LikeToggle, Liker, DEFAULT_COMMENT_PAGE_SIZE,
};
use crate::errors::AppError;
use crate::repositories::interaction::InteractionRepository;
use crate::repositories::project::ProjectRepository;

pub struct InteractionHandler<R, P>
where
    R: InteractionRepository,
    P: ProjectRepository,
{
    pub interaction_repo: R,
    pub project_repo: P,
}

impl<R, P> InteractionHandler<R, P>
where
    R: InteractionRepository,
    P: ProjectRepository,
{
    pub fn new(interaction_repo: R, project_repo: P) -> Self {
        InteractionHandler {
            interaction_repo,
            project_repo,
        }
    }

    /// Adds or removes the caller's like depending on its current state and
    /// reports the live count. Alternating calls return to the original
    /// state.
    pub async fn toggle_like(
        &self,
        user_id: &Uuid,
        project_id: &Uuid,
    ) -> Result<LikeToggle, AppError> {
        if !self.project_repo.project_exists(project_id).await? {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let liked = if self.interaction_repo.has_liked(user_id, project_id).await? {
            self.interaction_repo.delete_like(user_id, project_id).await?;
            false
        } else {
            // A lost race against a concurrent toggle-on still lands on
            // liked=true; the insert is a no-op in that case.
            self.interaction_repo.insert_like(user_id, project_id).await?;
            true
        };

        let likes_count = self.interaction_repo.count_likes(project_id).await?;
        Ok(LikeToggle { liked, likes_count })
    }

    /// Everyone who liked a project, plus the count.
    pub async fn get_likes(&self, project_id: &Uuid) -> Result<(Vec<Liker>, i64), AppError> {
        let users = self.interaction_repo.likers(project_id).await?;
        let count = self.interaction_repo.count_likes(project_id).await?;
        Ok((users, count))
    }

    /// Adds a comment and returns its id with the refreshed comment list.
    pub async fn add_comment(
        &self,
        project_id: &Uuid,
        user_id: &Uuid,
        content: &str,
    ) -> Result<(Uuid, Vec<CommentView>), AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::field("content", "Comment content is required"));
        }

        if !self.project_repo.project_exists(project_id).await? {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let comment_id = self
            .interaction_repo
            .insert_comment(project_id, user_id, content)
            .await?;

        let comments = self
            .interaction_repo
            .get_comments(project_id, DEFAULT_COMMENT_PAGE_SIZE, 0)
            .await?;

        Ok((comment_id, comments))
    }

    /// Paginated comment list plus the total count.
    pub async fn get_comments(
        &self,
        project_id: &Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<CommentView>, i64), AppError> {
        let comments = self
            .interaction_repo
            .get_comments(project_id, limit, offset)
            .await?;
        let count = self.interaction_repo.count_comments(project_id).await?;
        Ok((comments, count))
    }

    /// Author-only comment deletion.
    pub async fn delete_comment(
        &self,
        comment_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<(), AppError> {
        let author = self
            .interaction_repo
            .comment_author(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if author != *user_id {
            return Err(AppError::ForbiddenAccess);
        }

        let deleted = self.interaction_repo.delete_comment(comment_id).await?;
        if !deleted {
            return Err(AppError::NotFound("Comment not found".to_string()));
        }

        Ok(())
    }
}
