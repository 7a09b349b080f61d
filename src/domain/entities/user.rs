use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};
use uuid::Uuid;

use crate::domain::entities::option_fields::OptionField;
use crate::domain::password::validate_password_strength;

/// Platform roles. `Visitor` is the unprivileged default; only
/// `ProjectOwner` accounts may create and manage projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
pub enum Role {
    Visitor,
    ProjectOwner,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Visitor => "visitor",
            Role::ProjectOwner => "project_owner",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub country: Option<String>,
    pub profile_photo: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserInsert {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(min = 8, message = "Must be at least 8 characters"),
        custom(
            function = "validate_password_strength",
            message = "Must include uppercase, lowercase, and a digit"
        )
    )]
    pub password: String,

    #[validate(custom(function = "validate_register_role", message = "Invalid role"))]
    pub role: Option<Role>,

    pub bio: Option<String>,
    pub skills: Option<String>,
    pub country: Option<String>,
}

// Admin accounts are never self-service.
fn validate_register_role(role: &Role) -> Result<(), ValidationError> {
    match role {
        Role::Visitor | Role::ProjectOwner => Ok(()),
        Role::Admin => Err(ValidationError::new("invalid_role")),
    }
}

impl NewUser {
    pub fn prepare_for_insert(&self, password_hash: String) -> UserInsert {
        UserInsert {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password_hash,
            role: self.role.unwrap_or(Role::Visitor),
            bio: self.bio.clone(),
            skills: self.skills.clone(),
            country: self.country.clone(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

/// Everything a client may see about a user. Never carries the hash.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub country: Option<String>,
    pub profile_photo: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            bio: user.bio,
            skills: user.skills,
            country: user.country,
            profile_photo: user.profile_photo,
            linkedin: user.linkedin,
            twitter: user.twitter,
            website: user.website,
            created_at: user.created_at,
        }
    }
}

/// Partial profile update. Name and country fields are set-only; the
/// free-text and link fields distinguish "absent" from "explicitly cleared".
/// Email and password are not updatable through this request.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: Option<String>,

    pub country: Option<String>,
    pub bio: OptionField<String>,
    pub skills: OptionField<String>,
    pub linkedin: OptionField<String>,
    pub twitter: OptionField<String>,
    pub website: OptionField<String>,
}

/// What the repository applies. Built from an [`UpdateProfileRequest`] plus
/// an optionally uploaded profile photo filename.
#[derive(Debug, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country: Option<String>,
    pub bio: OptionField<String>,
    pub skills: OptionField<String>,
    pub linkedin: OptionField<String>,
    pub twitter: OptionField<String>,
    pub website: OptionField<String>,
    pub profile_photo: Option<String>,
}

impl UserPatch {
    pub fn from_request(request: UpdateProfileRequest, profile_photo: Option<String>) -> Self {
        UserPatch {
            first_name: request.first_name,
            last_name: request.last_name,
            country: request.country,
            bio: request.bio,
            skills: request.skills,
            linkedin: request.linkedin,
            twitter: request.twitter,
            website: request.website,
            profile_photo,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.country.is_none()
            && self.bio.is_unchanged()
            && self.skills.is_unchanged()
            && self.linkedin.is_unchanged()
            && self.twitter.is_unchanged()
            && self.website.is_unchanged()
            && self.profile_photo.is_none()
    }
}
