use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};

use crate::entities::token::Claims;
use crate::entities::user::User;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            expiration: Duration::days(config.jwt_expiration_days),
        }
    }

    pub fn create_token(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.expiration).timestamp() as usize;

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            exp,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|_| AuthError::TokenCreation)
    }

    pub fn decode_token(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.keys.decoding, &validation).map_err(AuthError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::user::Role;
    use uuid::Uuid;

    fn test_config(secret: &str) -> AppConfig {
        AppConfig {
            jwt_secret: secret.to_string(),
            jwt_expiration_days: 7,
            ..Default::default()
        }
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Awa".into(),
            last_name: "Diop".into(),
            email: "awa@example.com".into(),
            password_hash: "hash".into(),
            role: Role::ProjectOwner,
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

    #[test]
    fn token_round_trip_preserves_identity() {
        let service = JwtService::new(&test_config("a-very-long-test-secret-of-32-chars!!"));
        let user = test_user();

        let token = service.create_token(&user).unwrap();
        let claims = service.decode_token(&token).unwrap().claims;

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, Role::ProjectOwner);
        assert_eq!(claims.user_id().unwrap(), user.id);
    }

    #[test]
    fn token_expires_after_seven_days() {
        let service = JwtService::new(&test_config("a-very-long-test-secret-of-32-chars!!"));
        let claims = service
            .decode_token(&service.create_token(&test_user()).unwrap())
            .unwrap()
            .claims;

        let lifetime = claims.exp - claims.iat;
        assert_eq!(lifetime, 7 * 24 * 60 * 60);
    }

    #[test]
    fn expired_token_is_a_distinct_error() {
        let mut config = test_config("a-very-long-test-secret-of-32-chars!!");
        config.jwt_expiration_days = -1;
        let service = JwtService::new(&config);

        let token = service.create_token(&test_user()).unwrap();
        let err = service.decode_token(&token).err().unwrap();
        assert_eq!(err, AuthError::TokenExpired);
    }

    #[test]
    fn wrong_secret_is_invalid_not_expired() {
        let issuer = JwtService::new(&test_config("a-very-long-test-secret-of-32-chars!!"));
        let verifier = JwtService::new(&test_config("another-long-test-secret-of-32-chars"));

        let token = issuer.create_token(&test_user()).unwrap();
        let err = verifier.decode_token(&token).err().unwrap();
        assert_eq!(err, AuthError::InvalidToken);
    }
}
