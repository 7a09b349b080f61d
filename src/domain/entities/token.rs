use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::errors::AuthError;

/// Token payload carried by every authenticated request. Extracted once at
/// the middleware and trusted for the token's lifetime; the role is never
/// re-checked against the database until the token expires.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.sub).map_err(|_| AuthError::InvalidUserId)
    }
}

#[derive(Debug, Serialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub profile_photo: Option<String>,
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        AuthUser {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role,
            profile_photo: user.profile_photo.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

impl AuthResponse {
    pub fn new(token: String, user: &User) -> Self {
        AuthResponse {
            token,
            user: AuthUser::from(user),
        }
    }
}
