mod common;

use common::*;
use uuid::Uuid;

use showcase_backend::auth::password::hash_password;
use showcase_backend::entities::option_fields::OptionField;
use showcase_backend::entities::user::{LoginUser, NewUser, Role, UpdateProfileRequest};
use showcase_backend::errors::{AppError, AuthError};
use showcase_backend::use_cases::auth::AuthHandler;

fn valid_registration() -> NewUser {
    NewUser {
        first_name: "Awa".into(),
        last_name: "Diop".into(),
        email: "a@x.com".into(),
        password: "Abcdef12".into(),
        role: Some(Role::ProjectOwner),
        bio: None,
        skills: None,
        country: None,
    }
}

#[actix_rt::test]
async fn register_returns_a_decodable_token_and_the_public_user() {
    let mut repo = MockUserRepo::new();
    repo.expect_email_exists().returning(|_| Ok(false));
    repo.expect_create_user()
        .returning(|insert| Ok(user_from_insert(insert)));

    let handler = AuthHandler::new(repo, test_jwt_service());
    let response = handler.register(valid_registration()).await.unwrap();

    assert!(!response.token.is_empty());
    assert_eq!(response.user.email, "a@x.com");
    assert_eq!(response.user.role, Role::ProjectOwner);

    let claims = test_jwt_service().decode_token(&response.token).unwrap().claims;
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.role, Role::ProjectOwner);
    assert_eq!(claims.user_id().unwrap(), response.user.id);
}

#[actix_rt::test]
async fn register_hashes_the_password_before_persisting() {
    let mut repo = MockUserRepo::new();
    repo.expect_email_exists().returning(|_| Ok(false));
    repo.expect_create_user().returning(|insert| {
        assert_ne!(insert.password_hash, "Abcdef12");
        assert!(insert.password_hash.starts_with("$argon2"));
        Ok(user_from_insert(insert))
    });

    let handler = AuthHandler::new(repo, test_jwt_service());
    handler.register(valid_registration()).await.unwrap();
}

#[actix_rt::test]
async fn second_registration_with_same_email_is_a_duplicate() {
    let mut repo = MockUserRepo::new();
    repo.expect_email_exists().returning(|_| Ok(true));

    let handler = AuthHandler::new(repo, test_jwt_service());
    let result = handler.register(valid_registration()).await;

    assert!(matches!(result, Err(AppError::DuplicateEmail)));
}

#[actix_rt::test]
async fn lost_insert_race_still_reports_a_duplicate() {
    let mut repo = MockUserRepo::new();
    repo.expect_email_exists().returning(|_| Ok(false));
    repo.expect_create_user()
        .returning(|_| Err(AppError::Conflict("User with this email already exists".into())));

    let handler = AuthHandler::new(repo, test_jwt_service());
    let result = handler.register(valid_registration()).await;

    assert!(matches!(result, Err(AppError::DuplicateEmail)));
}

#[actix_rt::test]
async fn weak_password_fails_validation_before_any_repo_call() {
    let repo = MockUserRepo::new();
    let handler = AuthHandler::new(repo, test_jwt_service());

    let mut request = valid_registration();
    request.password = "abcdefgh".into();
    let result = handler.register(request).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn login_with_unknown_email_and_wrong_password_are_indistinguishable() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email()
        .returning(|_| Ok(None));

    let handler = AuthHandler::new(repo, test_jwt_service());
    let unknown = handler
        .login(LoginUser {
            email: "nobody@x.com".into(),
            password: "Abcdef12".into(),
        })
        .await
        .err()
        .unwrap();

    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email().returning(|_| {
        let mut user = sample_user("a@x.com", Role::ProjectOwner);
        user.password_hash = hash_password("Abcdef12").unwrap();
        Ok(Some(user))
    });

    let handler = AuthHandler::new(repo, test_jwt_service());
    let mismatch = handler
        .login(LoginUser {
            email: "a@x.com".into(),
            password: "WrongPass1".into(),
        })
        .await
        .err()
        .unwrap();

    assert_eq!(unknown, AuthError::WrongCredentials);
    assert_eq!(mismatch, AuthError::WrongCredentials);
    assert_eq!(unknown.to_string(), mismatch.to_string());
}

#[actix_rt::test]
async fn login_with_correct_password_succeeds() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email().returning(|_| {
        let mut user = sample_user("a@x.com", Role::Visitor);
        user.password_hash = hash_password("Abcdef12").unwrap();
        Ok(Some(user))
    });

    let handler = AuthHandler::new(repo, test_jwt_service());
    let response = handler
        .login(LoginUser {
            email: "a@x.com".into(),
            password: "Abcdef12".into(),
        })
        .await
        .unwrap();

    let claims = test_jwt_service().decode_token(&response.token).unwrap().claims;
    assert_eq!(claims.role, Role::Visitor);
}

#[actix_rt::test]
async fn get_profile_of_missing_user_is_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_id().returning(|_| Ok(None));

    let handler = AuthHandler::new(repo, test_jwt_service());
    let result = handler.get_profile(&Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn empty_profile_update_is_rejected_without_a_repo_call() {
    let repo = MockUserRepo::new();
    let handler = AuthHandler::new(repo, test_jwt_service());

    let result = handler
        .update_profile(&Uuid::new_v4(), UpdateProfileRequest::default(), None)
        .await;

    assert!(matches!(result, Err(AppError::NoFieldsToUpdate)));
}

#[actix_rt::test]
async fn photo_only_update_is_not_a_noop() {
    let user = sample_user("a@x.com", Role::Visitor);
    let user_id = user.id;

    let mut repo = MockUserRepo::new();
    repo.expect_update_user()
        .withf(|_, patch| patch.profile_photo.as_deref() == Some("img-1.png"))
        .returning(|_, _| Ok(true));
    repo.expect_get_user_by_id()
        .returning(move |_| Ok(Some(user.clone())));

    let handler = AuthHandler::new(repo, test_jwt_service());
    let result = handler
        .update_profile(&user_id, UpdateProfileRequest::default(), Some("img-1.png".into()))
        .await;

    assert!(result.is_ok());
}

#[actix_rt::test]
async fn explicitly_cleared_bio_reaches_the_repository_as_a_clear() {
    let user = sample_user("a@x.com", Role::Visitor);
    let user_id = user.id;

    let mut repo = MockUserRepo::new();
    repo.expect_update_user()
        .withf(|_, patch| patch.bio.is_set_to_null() && patch.website.is_unchanged())
        .returning(|_, _| Ok(true));
    repo.expect_get_user_by_id()
        .returning(move |_| Ok(Some(user.clone())));

    let handler = AuthHandler::new(repo, test_jwt_service());
    let request = UpdateProfileRequest {
        bio: OptionField::SetToNull,
        ..Default::default()
    };

    assert!(handler.update_profile(&user_id, request, None).await.is_ok());
}
