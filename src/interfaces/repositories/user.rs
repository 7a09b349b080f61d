use std::borrow::Cow;

use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

use crate::{
    entities::user::{User, UserInsert, UserPatch},
    errors::AppError,
    repositories::sqlx_repo::SqlxUserRepo,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
    async fn create_user(&self, user: &UserInsert) -> Result<User, AppError>;
    /// Applies only the fields the patch carries. Returns false when the
    /// patch is empty or no row matched.
    async fn update_user(&self, id: &Uuid, patch: &UserPatch) -> Result<bool, AppError>;
    async fn delete_user(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxUserRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxUserRepo { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepo {
    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(exists)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn create_user(&self, user: &UserInsert) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                first_name,
                last_name,
                email,
                password_hash,
                role,
                bio,
                skills,
                country,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(&user.bio)
        .bind(&user.skills)
        .bind(&user.country)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            match e {
                sqlx::Error::Database(db_err) if db_err.code() == Some(Cow::Borrowed("23505")) => {
                    AppError::Conflict("User with this email already exists".to_string())
                }
                _ => AppError::from(e),
            }
        })
    }

    async fn update_user(&self, id: &Uuid, patch: &UserPatch) -> Result<bool, AppError> {
        if patch.is_empty() {
            return Ok(false);
        }

        let mut builder = QueryBuilder::new("UPDATE users SET ");
        let mut fields = builder.separated(", ");

        if let Some(first_name) = &patch.first_name {
            fields.push("first_name = ").push_bind_unseparated(first_name);
        }
        if let Some(last_name) = &patch.last_name {
            fields.push("last_name = ").push_bind_unseparated(last_name);
        }
        if let Some(country) = &patch.country {
            fields.push("country = ").push_bind_unseparated(country);
        }
        match patch.bio.as_ref_option() {
            None => {}
            Some(None) => {
                fields.push("bio = NULL");
            }
            Some(Some(bio)) => {
                fields.push("bio = ").push_bind_unseparated(bio);
            }
        }
        match patch.skills.as_ref_option() {
            None => {}
            Some(None) => {
                fields.push("skills = NULL");
            }
            Some(Some(skills)) => {
                fields.push("skills = ").push_bind_unseparated(skills);
            }
        }
        match patch.linkedin.as_ref_option() {
            None => {}
            Some(None) => {
                fields.push("linkedin = NULL");
            }
            Some(Some(linkedin)) => {
                fields.push("linkedin = ").push_bind_unseparated(linkedin);
            }
        }
        match patch.twitter.as_ref_option() {
            None => {}
            Some(None) => {
                fields.push("twitter = NULL");
            }
            Some(Some(twitter)) => {
                fields.push("twitter = ").push_bind_unseparated(twitter);
            }
        }
        match patch.website.as_ref_option() {
            None => {}
            Some(None) => {
                fields.push("website = NULL");
            }
            Some(Some(website)) => {
                fields.push("website = ").push_bind_unseparated(website);
            }
        }
        if let Some(profile_photo) = &patch.profile_photo {
            fields.push("profile_photo = ").push_bind_unseparated(profile_photo);
        }

        builder.push(" WHERE id = ").push_bind(id);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_user(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
