use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::project::{Project, ProjectStatus};
use crate::domain::entities::user::Role;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct RoleCount {
    pub role: Role,
    pub count: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: i64,
}

/// Ranked by owned projects + likes given + comments made.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ActiveUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub projects_count: i64,
    pub likes_count: i64,
    pub comments_count: i64,
}

/// Ranked by likes + comments.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PopularProject {
    pub id: Uuid,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub likes_count: i64,
    pub comments_count: i64,
}

/// One calendar day of merged user/project/like/comment creations.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AdminUserRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub projects_count: i64,
    pub likes_given: i64,
    pub comments_count: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AdminProjectRow {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub project: Project,
    pub first_name: String,
    pub last_name: String,
    pub owner_email: String,
    pub likes_count: i64,
    pub comments_count: i64,
}

#[derive(Debug, Serialize)]
pub struct UserStats {
    pub total: i64,
    pub by_role: Vec<RoleCount>,
}

#[derive(Debug, Serialize)]
pub struct ProjectStats {
    pub total: i64,
    pub by_status: Vec<StatusCount>,
}

#[derive(Debug, Serialize)]
pub struct InteractionStats {
    pub likes: i64,
    pub comments: i64,
}

#[derive(Debug, Serialize)]
pub struct Statistics {
    pub users: UserStats,
    pub projects: ProjectStats,
    pub interactions: InteractionStats,
    pub active_users: Vec<ActiveUser>,
    pub popular_projects: Vec<PopularProject>,
    pub recent_activity: Vec<DailyActivity>,
}
