use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_COMMENT_PAGE_SIZE: i64 = 50;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment enriched with the author's display fields.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CommentView {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub comment: Comment,
    pub first_name: String,
    pub last_name: String,
    pub author_photo: Option<String>,
}

/// A user who liked a project, newest like first.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Liker {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub profile_photo: Option<String>,
    pub liked_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewCommentRequest {
    pub content: String,
}

/// Outcome of a like toggle: the new state plus the live count.
#[derive(Debug, Serialize, PartialEq)]
pub struct LikeToggle {
    pub liked: bool,
    #[serde(rename = "likesCount")]
    pub likes_count: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageQuery {
    pub fn limit_or(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}
