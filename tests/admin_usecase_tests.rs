mod common;

use common::*;
use uuid::Uuid;

use showcase_backend::entities::admin::{RoleCount, StatusCount};
use showcase_backend::entities::project::ProjectStatus;
use showcase_backend::entities::user::Role;
use showcase_backend::errors::AppError;
use showcase_backend::use_cases::admin::AdminHandler;

fn handler_with(
    admin: MockAdminRepo,
    users: MockUserRepo,
    projects: MockProjectRepo,
) -> AdminHandler<MockAdminRepo, MockUserRepo, MockProjectRepo> {
    AdminHandler::new(admin, users, projects)
}

#[actix_rt::test]
async fn statistics_assembles_every_section() {
    let mut admin = MockAdminRepo::new();
    admin.expect_count_users().returning(|| Ok(42));
    admin.expect_users_by_role().returning(|| {
        Ok(vec![
            RoleCount { role: Role::Visitor, count: 30 },
            RoleCount { role: Role::ProjectOwner, count: 11 },
            RoleCount { role: Role::Admin, count: 1 },
        ])
    });
    admin.expect_count_projects().returning(|| Ok(17));
    admin.expect_projects_by_status().returning(|| {
        Ok(vec![
            StatusCount { status: ProjectStatus::InProgress, count: 5 },
            StatusCount { status: ProjectStatus::Published, count: 12 },
        ])
    });
    admin.expect_count_likes().returning(|| Ok(200));
    admin.expect_count_comments().returning(|| Ok(90));
    admin
        .expect_most_active_users()
        .withf(|limit| *limit == 10)
        .returning(|_| Ok(Vec::new()));
    admin
        .expect_most_popular_projects()
        .withf(|limit| *limit == 10)
        .returning(|_| Ok(Vec::new()));
    admin
        .expect_recent_activity()
        .withf(|days| *days == 30)
        .returning(|_| Ok(Vec::new()));

    let handler = handler_with(admin, MockUserRepo::new(), MockProjectRepo::new());
    let statistics = handler.statistics().await.unwrap();

    assert_eq!(statistics.users.total, 42);
    assert_eq!(statistics.users.by_role.len(), 3);
    assert_eq!(statistics.projects.total, 17);
    assert_eq!(statistics.projects.by_status.len(), 2);
    assert_eq!(statistics.interactions.likes, 200);
    assert_eq!(statistics.interactions.comments, 90);
}

#[actix_rt::test]
async fn an_admin_cannot_delete_their_own_account() {
    let admin_id = Uuid::new_v4();

    // No delete_user expectation: reaching the repository would panic.
    let handler = handler_with(MockAdminRepo::new(), MockUserRepo::new(), MockProjectRepo::new());
    let result = handler.delete_user(&admin_id, &admin_id).await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[actix_rt::test]
async fn deleting_another_user_goes_through_the_user_repository() {
    let mut users = MockUserRepo::new();
    users.expect_delete_user().times(1).returning(|_| Ok(true));

    let handler = handler_with(MockAdminRepo::new(), users, MockProjectRepo::new());
    let result = handler.delete_user(&Uuid::new_v4(), &Uuid::new_v4()).await;

    assert!(result.is_ok());
}

#[actix_rt::test]
async fn deleting_a_missing_user_is_not_found() {
    let mut users = MockUserRepo::new();
    users.expect_delete_user().returning(|_| Ok(false));

    let handler = handler_with(MockAdminRepo::new(), users, MockProjectRepo::new());
    let result = handler.delete_user(&Uuid::new_v4(), &Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn deleting_a_project_reuses_the_project_repository() {
    let mut projects = MockProjectRepo::new();
    projects.expect_delete_project().times(1).returning(|_| Ok(true));

    let handler = handler_with(MockAdminRepo::new(), MockUserRepo::new(), projects);
    assert!(handler.delete_project(&Uuid::new_v4(), &Uuid::new_v4()).await.is_ok());
}

#[actix_rt::test]
async fn deleting_a_missing_project_is_not_found() {
    let mut projects = MockProjectRepo::new();
    projects.expect_delete_project().returning(|_| Ok(false));

    let handler = handler_with(MockAdminRepo::new(), MockUserRepo::new(), projects);
    let result = handler.delete_project(&Uuid::new_v4(), &Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
