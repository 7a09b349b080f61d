use uuid::Uuid;
use validator::Validate;

use crate::auth::jwt::JwtService;
use crate::auth::password::{hash_password, verify_password};
use crate::entities::token::AuthResponse;
use crate::entities::user::{
    LoginUser, NewUser, PublicUser, UpdateProfileRequest, UserPatch,
};
use crate::errors::{AppError, AuthError};
use crate::repositories::user::UserRepository;

pub struct AuthHandler<R>
where
    R: UserRepository,
{
    pub user_repo: R,
    pub jwt: JwtService,
}

impl<R> AuthHandler<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: R, jwt: JwtService) -> Self {
        AuthHandler { user_repo, jwt }
    }

    /// Registers a new user and signs them in with a fresh token.
    pub async fn register(&self, request: NewUser) -> Result<AuthResponse, AppError> {
        request.validate()?;

        if self.user_repo.email_exists(&request.email).await? {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = hash_password(&request.password)?;
        let user_insert = request.prepare_for_insert(password_hash);

        // The unique index still wins the race between the pre-check and
        // the insert.
        let user = match self.user_repo.create_user(&user_insert).await {
            Ok(user) => user,
            Err(AppError::Conflict(_)) => return Err(AppError::DuplicateEmail),
            Err(e) => return Err(e),
        };

        let token = self
            .jwt
            .create_token(&user)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        tracing::info!("user {} registered", user.id);
        Ok(AuthResponse::new(token, &user))
    }

    /// Logs in a user. Unknown email and wrong password are observably the
    /// same failure, so the endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, request: LoginUser) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let user = self
            .user_repo
            .get_user_by_email(&request.email)
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(&request.password, &user.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let token = self.jwt.create_token(&user)?;

        tracing::info!("user {} logged in", user.id);
        Ok(AuthResponse::new(token, &user))
    }

    /// The caller's own profile.
    pub async fn get_profile(&self, user_id: &Uuid) -> Result<PublicUser, AppError> {
        self.user_repo
            .get_user_by_id(user_id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Anyone's profile, same projection as [`AuthHandler::get_profile`].
    pub async fn get_public_profile(&self, id: &Uuid) -> Result<PublicUser, AppError> {
        self.get_profile(id).await
    }

    /// Applies a partial profile update plus an optionally uploaded photo.
    /// Email and password are not reachable from here.
    pub async fn update_profile(
        &self,
        user_id: &Uuid,
        request: UpdateProfileRequest,
        profile_photo: Option<String>,
    ) -> Result<PublicUser, AppError> {
        request.validate()?;

        let patch = UserPatch::from_request(request, profile_photo);
        if patch.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        let updated = self.user_repo.update_user(user_id, &patch).await?;
        if !updated {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        self.get_profile(user_id).await
    }
}
