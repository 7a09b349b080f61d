use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::option_fields::OptionField;

pub const DEFAULT_PAGE_SIZE: i64 = 12;
pub const MAX_PAGE_SIZE: i64 = 100;
pub const MAX_GALLERY_IMAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "project_category", rename_all = "snake_case")]
pub enum ProjectCategory {
    Technology,
    Art,
    Entrepreneurship,
    Innovation,
    Education,
    Health,
    Agriculture,
    Other,
}

/// One vocabulary for both the creation default and the listing filter:
/// new projects start `in_progress`, public listings show `published` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
pub enum ProjectStatus {
    InProgress,
    Published,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub location: Option<String>,
    pub external_link: Option<String>,
    pub main_image: Option<String>,
    pub gallery_images: Vec<String>,
    pub status: ProjectStatus,
    pub view_count: i32,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub location: Option<String>,
    pub external_link: Option<String>,
    pub main_image: Option<String>,
    pub gallery_images: Vec<String>,
    pub status: ProjectStatus,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub category: ProjectCategory,
    pub location: Option<String>,
    pub external_link: Option<String>,
}

impl NewProjectRequest {
    pub fn prepare_for_insert(
        self,
        owner_id: Uuid,
        main_image: Option<String>,
        gallery_images: Vec<String>,
    ) -> ProjectInsert {
        ProjectInsert {
            title: self.title,
            description: self.description,
            category: self.category,
            location: self.location,
            external_link: self.external_link,
            main_image,
            gallery_images,
            status: ProjectStatus::InProgress,
            owner_id,
            created_at: Utc::now(),
        }
    }
}

/// Partial project update. Title/description/category/status are set-only;
/// location and external_link can be explicitly cleared. `id` and `owner_id`
/// have no representation here and thus can never be touched. Images are
/// populated from uploads, never from the JSON body.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ProjectPatch {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    pub category: Option<ProjectCategory>,
    pub location: OptionField<String>,
    pub external_link: OptionField<String>,
    pub status: Option<ProjectStatus>,

    #[serde(skip)]
    pub main_image: Option<String>,
    #[serde(skip)]
    pub gallery_images: Option<Vec<String>>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.location.is_unchanged()
            && self.external_link.is_unchanged()
            && self.status.is_none()
            && self.main_image.is_none()
            && self.gallery_images.is_none()
    }
}

/// Listing row: the project plus owner display fields and live counts.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ProjectSummary {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub project: Project,
    pub first_name: String,
    pub last_name: String,
    pub author_photo: Option<String>,
    pub likes_count: i64,
    pub comments_count: i64,
}

/// Profile listing row: no owner join, the caller already knows whose
/// projects these are.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct OwnedProject {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub project: Project,
    pub likes_count: i64,
    pub comments_count: i64,
}

/// Detail row: owner contact fields and live counts.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ProjectDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub project: Project,
    pub first_name: String,
    pub last_name: String,
    pub owner_email: String,
    pub owner_bio: Option<String>,
    pub author_photo: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub likes_count: i64,
    pub comments_count: i64,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    #[serde(flatten)]
    pub detail: ProjectDetail,
    pub has_liked: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSort {
    #[default]
    Recent,
    Popular,
    Oldest,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilters {
    pub category: Option<ProjectCategory>,
    pub location: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort: ProjectSort,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ProjectFilters {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

impl Pagination {
    pub fn new(total: i64, limit: i64, offset: i64) -> Self {
        Pagination {
            total,
            limit,
            offset,
            has_more: offset + limit < total,
        }
    }
}
