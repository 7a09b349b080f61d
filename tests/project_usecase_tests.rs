mod common;

use common::*;
use uuid::Uuid;

use showcase_backend::entities::project::{
    NewProjectRequest, ProjectCategory, ProjectFilters, ProjectPatch, ProjectStatus,
    ProjectSummary,
};
use showcase_backend::entities::user::Role;
use showcase_backend::errors::AppError;
use showcase_backend::use_cases::projects::ProjectHandler;

fn solar_kit() -> NewProjectRequest {
    NewProjectRequest {
        title: "Solar Kit".into(),
        description: "Affordable solar kits for rural areas".into(),
        category: ProjectCategory::Technology,
        location: Some("Dakar".into()),
        external_link: None,
    }
}

#[actix_rt::test]
async fn create_then_fetch_round_trips_the_submitted_fields() {
    let owner = sample_user("a@x.com", Role::ProjectOwner);
    let owner_id = owner.id;
    let project_id = Uuid::new_v4();

    let mut projects = MockProjectRepo::new();
    projects.expect_create_project().returning(move |insert| {
        assert_eq!(insert.owner_id, owner_id);
        Ok(project_id)
    });
    projects
        .expect_find_by_id()
        .returning(move |id| {
            let insert = solar_kit().prepare_for_insert(owner_id, None, Vec::new());
            Ok(Some(detail_from_insert(&insert, *id, &owner)))
        });

    let handler = ProjectHandler::new(projects, MockInteractionRepo::new());
    let detail = handler
        .create(owner_id, solar_kit(), None, Vec::new())
        .await
        .unwrap();

    assert_eq!(detail.project.id, project_id);
    assert_eq!(detail.project.title, "Solar Kit");
    assert_eq!(detail.project.category, ProjectCategory::Technology);
    assert_eq!(detail.project.status, ProjectStatus::InProgress);
    assert_eq!(detail.likes_count, 0);
    assert_eq!(detail.comments_count, 0);
}

#[actix_rt::test]
async fn listing_pairs_rows_with_count_driven_pagination() {
    let owner = sample_user("a@x.com", Role::ProjectOwner);

    let mut projects = MockProjectRepo::new();
    projects.expect_get_all().returning(move |_| {
        let owner = owner.clone();
        Ok((0..12)
            .map(|_| {
                let project = sample_project(owner.id);
                ProjectSummary {
                    project,
                    first_name: owner.first_name.clone(),
                    last_name: owner.last_name.clone(),
                    author_photo: None,
                    likes_count: 0,
                    comments_count: 0,
                }
            })
            .collect())
    });
    projects.expect_count().returning(|_| Ok(30));

    let handler = ProjectHandler::new(projects, MockInteractionRepo::new());
    let (rows, pagination) = handler.list(&ProjectFilters::default()).await.unwrap();

    assert_eq!(rows.len(), 12);
    assert_eq!(pagination.total, 30);
    assert!(pagination.has_more);
}

#[actix_rt::test]
async fn detail_bumps_the_view_counter_as_a_side_effect() {
    let owner = sample_user("a@x.com", Role::ProjectOwner);
    let project = sample_project(owner.id);
    let project_id = project.id;

    let mut projects = MockProjectRepo::new();
    projects
        .expect_find_by_id()
        .returning(move |_| Ok(Some(detail_for_project(&project, &owner))));
    projects
        .expect_increment_views()
        .times(1)
        .returning(|_| Ok(()));

    let mut interactions = MockInteractionRepo::new();
    interactions.expect_get_comments().returning(|_, _, _| Ok(Vec::new()));

    let handler = ProjectHandler::new(projects, interactions);
    let (response, comments) = handler.detail(&project_id, None).await.unwrap();

    assert!(!response.has_liked);
    assert!(comments.is_empty());
}

#[actix_rt::test]
async fn detail_of_missing_project_is_not_found_and_counts_nothing() {
    let mut projects = MockProjectRepo::new();
    projects.expect_find_by_id().returning(|_| Ok(None));
    // No increment_views expectation: a call would panic the mock.

    let handler = ProjectHandler::new(projects, MockInteractionRepo::new());
    let result = handler.detail(&Uuid::new_v4(), None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn detail_reports_the_viewer_like_state() {
    let owner = sample_user("a@x.com", Role::ProjectOwner);
    let project = sample_project(owner.id);
    let project_id = project.id;
    let viewer = Uuid::new_v4();

    let mut projects = MockProjectRepo::new();
    projects
        .expect_find_by_id()
        .returning(move |_| Ok(Some(detail_for_project(&project, &owner))));
    projects.expect_increment_views().returning(|_| Ok(()));

    let mut interactions = MockInteractionRepo::new();
    interactions
        .expect_has_liked()
        .withf(move |user_id, _| *user_id == viewer)
        .returning(|_, _| Ok(true));
    interactions.expect_get_comments().returning(|_, _, _| Ok(Vec::new()));

    let handler = ProjectHandler::new(projects, interactions);
    let (response, _) = handler.detail(&project_id, Some(viewer)).await.unwrap();

    assert!(response.has_liked);
}

#[actix_rt::test]
async fn update_by_non_owner_is_forbidden() {
    let mut projects = MockProjectRepo::new();
    projects
        .expect_owner_id()
        .returning(|_| Ok(Some(Uuid::new_v4())));

    let handler = ProjectHandler::new(projects, MockInteractionRepo::new());
    let patch = ProjectPatch {
        title: Some("New title".into()),
        ..Default::default()
    };
    let result = handler.update(&Uuid::new_v4(), &Uuid::new_v4(), patch).await;

    assert!(matches!(result, Err(AppError::ForbiddenAccess)));
}

#[actix_rt::test]
async fn empty_update_is_rejected_after_the_ownership_check() {
    let caller = Uuid::new_v4();

    let mut projects = MockProjectRepo::new();
    projects.expect_owner_id().returning(move |_| Ok(Some(caller)));

    let handler = ProjectHandler::new(projects, MockInteractionRepo::new());
    let result = handler
        .update(&Uuid::new_v4(), &caller, ProjectPatch::default())
        .await;

    assert!(matches!(result, Err(AppError::NoFieldsToUpdate)));
}

#[actix_rt::test]
async fn delete_of_missing_project_is_not_found() {
    let mut projects = MockProjectRepo::new();
    projects.expect_owner_id().returning(|_| Ok(None));

    let handler = ProjectHandler::new(projects, MockInteractionRepo::new());
    let result = handler.delete(&Uuid::new_v4(), &Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn owner_can_delete_their_project() {
    let caller = Uuid::new_v4();

    let mut projects = MockProjectRepo::new();
    projects.expect_owner_id().returning(move |_| Ok(Some(caller)));
    projects.expect_delete_project().returning(|_| Ok(true));

    let handler = ProjectHandler::new(projects, MockInteractionRepo::new());
    assert!(handler.delete(&Uuid::new_v4(), &caller).await.is_ok());
}
