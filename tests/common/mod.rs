#![allow(dead_code)]

use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use showcase_backend::auth::jwt::JwtService;
use showcase_backend::entities::admin::{
    ActiveUser, AdminProjectRow, AdminUserRow, DailyActivity, PopularProject, RoleCount,
    StatusCount,
};
use showcase_backend::entities::interaction::{CommentView, Liker};
use showcase_backend::entities::project::{
    OwnedProject, Project, ProjectCategory, ProjectDetail, ProjectFilters, ProjectInsert,
    ProjectPatch, ProjectStatus, ProjectSummary,
};
use showcase_backend::entities::user::{Role, User, UserInsert, UserPatch};
use showcase_backend::errors::AppError;
use showcase_backend::repositories::admin::AdminRepository;
use showcase_backend::repositories::interaction::InteractionRepository;
use showcase_backend::repositories::project::ProjectRepository;
use showcase_backend::repositories::user::UserRepository;
use showcase_backend::settings::AppConfig;

mock! {
    pub UserRepo {}

    #[async_trait::async_trait]
    impl UserRepository for UserRepo {
        async fn email_exists(&self, email: &str) -> Result<bool, AppError>;
        async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
        async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
        async fn create_user(&self, user: &UserInsert) -> Result<User, AppError>;
        async fn update_user(&self, id: &Uuid, patch: &UserPatch) -> Result<bool, AppError>;
        async fn delete_user(&self, id: &Uuid) -> Result<bool, AppError>;
    }
}

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn create_project(&self, project: &ProjectInsert) -> Result<Uuid, AppError>;
        async fn get_all(&self, filters: &ProjectFilters) -> Result<Vec<ProjectSummary>, AppError>;
        async fn count(&self, filters: &ProjectFilters) -> Result<i64, AppError>;
        async fn find_by_id(&self, id: &Uuid) -> Result<Option<ProjectDetail>, AppError>;
        async fn find_by_user_id(
            &self,
            user_id: &Uuid,
            limit: i64,
            offset: i64,
        ) -> Result<Vec<OwnedProject>, AppError>;
        async fn update_project(&self, id: &Uuid, patch: &ProjectPatch) -> Result<bool, AppError>;
        async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError>;
        async fn increment_views(&self, id: &Uuid) -> Result<(), AppError>;
        async fn owner_id(&self, id: &Uuid) -> Result<Option<Uuid>, AppError>;
        async fn project_exists(&self, id: &Uuid) -> Result<bool, AppError>;
    }
}

mock! {
    pub InteractionRepo {}

    #[async_trait::async_trait]
    impl InteractionRepository for InteractionRepo {
        async fn has_liked(&self, user_id: &Uuid, project_id: &Uuid) -> Result<bool, AppError>;
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
}

mock! {
    pub AdminRepo {}

    #[async_trait::async_trait]
    impl AdminRepository for AdminRepo {
        async fn count_users(&self) -> Result<i64, AppError>;
        async fn users_by_role(&self) -> Result<Vec<RoleCount>, AppError>;
        async fn count_projects(&self) -> Result<i64, AppError>;
        async fn projects_by_status(&self) -> Result<Vec<StatusCount>, AppError>;
        async fn count_likes(&self) -> Result<i64, AppError>;
        async fn count_comments(&self) -> Result<i64, AppError>;
        async fn most_active_users(&self, limit: i64) -> Result<Vec<ActiveUser>, AppError>;
        async fn most_popular_projects(&self, limit: i64) -> Result<Vec<PopularProject>, AppError>;
        async fn recent_activity(&self, days: i32) -> Result<Vec<DailyActivity>, AppError>;
        async fn list_users(&self) -> Result<Vec<AdminUserRow>, AppError>;
        async fn list_projects(&self) -> Result<Vec<AdminProjectRow>, AppError>;
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        jwt_secret: "a-very-long-test-secret-of-32-chars!!".to_string(),
        jwt_expiration_days: 7,
        ..Default::default()
    }
}

pub fn test_jwt_service() -> JwtService {
    JwtService::new(&test_config())
}

pub fn sample_user(email: &str, role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        first_name: "Awa".into(),
        last_name: "Diop".into(),
        email: email.into(),
        password_hash: "unused".into(),
        role,
        bio: None,
        skills: None,
        country: None,
        profile_photo: None,
        linkedin: None,
        twitter: None,
        website: None,
        created_at: Utc::now(),
    }
}

pub fn user_from_insert(insert: &UserInsert) -> User {
    User {
        id: Uuid::new_v4(),
        first_name: insert.first_name.clone(),
        last_name: insert.last_name.clone(),
        email: insert.email.clone(),
        password_hash: insert.password_hash.clone(),
        role: insert.role,
        bio: insert.bio.clone(),
        skills: insert.skills.clone(),
        country: insert.country.clone(),
        profile_photo: None,
        linkedin: None,
        twitter: None,
        website: None,
        created_at: insert.created_at,
    }
}

pub fn sample_project(owner_id: Uuid) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: "Solar Kit".into(),
        description: "Affordable solar kits for rural areas".into(),
        category: ProjectCategory::Technology,
        location: None,
        external_link: None,
        main_image: None,
        gallery_images: Vec::new(),
        status: ProjectStatus::InProgress,
        view_count: 0,
        owner_id,
        created_at: Utc::now(),
    }
}

pub fn detail_from_insert(insert: &ProjectInsert, id: Uuid, owner: &User) -> ProjectDetail {
    ProjectDetail {
        project: Project {
            id,
            title: insert.title.clone(),
            description: insert.description.clone(),
            category: insert.category,
            location: insert.location.clone(),
            external_link: insert.external_link.clone(),
            main_image: insert.main_image.clone(),
            gallery_images: insert.gallery_images.clone(),
            status: insert.status,
            view_count: 0,
            owner_id: insert.owner_id,
            created_at: insert.created_at,
        },
        first_name: owner.first_name.clone(),
        last_name: owner.last_name.clone(),
        owner_email: owner.email.clone(),
        owner_bio: owner.bio.clone(),
        author_photo: owner.profile_photo.clone(),
        linkedin: owner.linkedin.clone(),
        twitter: owner.twitter.clone(),
        website: owner.website.clone(),
        likes_count: 0,
        comments_count: 0,
    }
}

pub fn detail_for_project(project: &Project, owner: &User) -> ProjectDetail {
    ProjectDetail {
        project: project.clone(),
        first_name: owner.first_name.clone(),
        last_name: owner.last_name.clone(),
        owner_email: owner.email.clone(),
        owner_bio: owner.bio.clone(),
        author_photo: owner.profile_photo.clone(),
        linkedin: owner.linkedin.clone(),
        twitter: owner.twitter.clone(),
        website: owner.website.clone(),
        likes_count: 0,
        comments_count: 0,
    }
}
