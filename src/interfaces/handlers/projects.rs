use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{delete, get, post, put, web, Either, HttpResponse};
use uuid::Uuid;

use crate::entities::interaction::PageQuery;
use crate::entities::option_fields::OptionField;
use crate::entities::project::{
    NewProjectRequest, ProjectCategory, ProjectFilters, ProjectPatch, ProjectStatus,
    MAX_GALLERY_IMAGES,
};
use crate::use_cases::extractors::{AuthClaims, MaybeClaims, ProjectOwnerClaims};
use crate::AppState;

const PROFILE_PAGE_SIZE: i64 = 20;

/// Multipart variant of project creation: text fields plus up to one main
/// image and five gallery images.
#[derive(Debug, MultipartForm)]
pub struct ProjectUploadForm {
    pub title: Text<String>,
    pub description: Text<String>,
    pub category: Text<ProjectCategory>,
    pub location: Option<Text<String>>,
    pub external_link: Option<Text<String>>,
    #[multipart(limit = "5MiB")]
    pub main_image: Option<TempFile>,
    #[multipart(limit = "25MiB")]
    pub gallery_images: Vec<TempFile>,
}

impl ProjectUploadForm {
    fn into_request(self) -> (NewProjectRequest, Option<TempFile>, Vec<TempFile>) {
        let request = NewProjectRequest {
            title: self.title.into_inner(),
            description: self.description.into_inner(),
            category: self.category.into_inner(),
            location: non_empty(self.location),
            external_link: non_empty(self.external_link),
        };
        (request, self.main_image, self.gallery_images)
    }
}

/// Multipart variant of the project update.
#[derive(Debug, MultipartForm)]
pub struct ProjectUpdateForm {
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub category: Option<Text<ProjectCategory>>,
    pub location: Option<Text<String>>,
    pub external_link: Option<Text<String>>,
    pub status: Option<Text<ProjectStatus>>,
    #[multipart(limit = "5MiB")]
    pub main_image: Option<TempFile>,
    #[multipart(limit = "25MiB")]
    pub gallery_images: Vec<TempFile>,
}

impl ProjectUpdateForm {
    fn into_patch(self) -> (ProjectPatch, Option<TempFile>, Vec<TempFile>) {
        let patch = ProjectPatch {
            title: non_empty(self.title),
            description: non_empty(self.description),
            category: self.category.map(Text::into_inner),
            location: OptionField::from_form_text(self.location.map(Text::into_inner)),
            external_link: OptionField::from_form_text(self.external_link.map(Text::into_inner)),
            status: self.status.map(Text::into_inner),
            main_image: None,
            gallery_images: None,
        };
        (patch, self.main_image, self.gallery_images)
    }
}

fn non_empty(text: Option<Text<String>>) -> Option<String> {
    text.map(Text::into_inner).filter(|s| !s.trim().is_empty())
}

fn unsupported_media_type(e: actix_web::Error) -> HttpResponse {
    HttpResponse::UnsupportedMediaType().json(serde_json::json!({
        "success": false,
        "message": "Request must be application/json or multipart/form-data",
        "errors": [e.to_string()]
    }))
}

#[post("")]
pub async fn create_project(
    claims: ProjectOwnerClaims,
    state: web::Data<AppState>,
    payload: Result<
        Either<MultipartForm<ProjectUploadForm>, web::Json<NewProjectRequest>>,
        actix_web::Error,
    >,
) -> Result<HttpResponse, actix_web::Error> {
    let owner_id = claims.0.user_id()?;

    let either = match payload {
        Ok(either) => either,
        Err(e) => return Ok(unsupported_media_type(e)),
    };

    let (request, main_file, gallery_files) = match either {
        Either::Left(form) => form.into_inner().into_request(),
        Either::Right(json) => (json.into_inner(), None, Vec::new()),
    };

    let main_image = match main_file {
        Some(file) => Some(state.uploads.save_image(&file).await?),
        None => None,
    };
    let gallery_images = state
        .uploads
        .save_gallery(&gallery_files, MAX_GALLERY_IMAGES)
        .await?;

    let project = state
        .project_handler
        .create(owner_id, request, main_image, gallery_images)
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "Project created successfully",
        "data": { "project": project }
    })))
}

#[get("")]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectFilters>,
) -> Result<HttpResponse, actix_web::Error> {
    let (projects, pagination) = state.project_handler.list(&query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": {
            "projects": projects,
            "pagination": pagination
        }
    })))
}

#[get("/my")]
pub async fn my_projects(
    claims: AuthClaims,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = claims.0.user_id()?;
    let projects = state
        .project_handler
        .by_user(&user_id, query.limit_or(PROFILE_PAGE_SIZE), query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": { "projects": projects }
    })))
}

#[get("/user/{user_id}")]
pub async fn projects_by_user(
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let projects = state
        .project_handler
        .by_user(&path.into_inner(), query.limit_or(PROFILE_PAGE_SIZE), query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": { "projects": projects }
    })))
}

#[get("/{id}")]
pub async fn get_project(
    path: web::Path<Uuid>,
    viewer: MaybeClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let viewer_id = match viewer.0 {
        Some(claims) => Some(claims.user_id()?),
        None => None,
    };

    let (project, comments) = state
        .project_handler
        .detail(&path.into_inner(), viewer_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": {
            "project": project,
            "comments": comments
        }
    })))
}

#[put("/{id}")]
pub async fn update_project(
    claims: AuthClaims,
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
    payload: Result<
        Either<MultipartForm<ProjectUpdateForm>, web::Json<ProjectPatch>>,
        actix_web::Error,
    >,
) -> Result<HttpResponse, actix_web::Error> {
    let caller_id = claims.0.user_id()?;

    let either = match payload {
        Ok(either) => either,
        Err(e) => return Ok(unsupported_media_type(e)),
    };

    let (mut patch, main_file, gallery_files) = match either {
        Either::Left(form) => form.into_inner().into_patch(),
        Either::Right(json) => (json.into_inner(), None, Vec::new()),
    };

    if let Some(file) = main_file {
        patch.main_image = Some(state.uploads.save_image(&file).await?);
    }
    if !gallery_files.is_empty() {
        patch.gallery_images = Some(
            state
                .uploads
                .save_gallery(&gallery_files, MAX_GALLERY_IMAGES)
                .await?,
        );
    }

    let project = state
        .project_handler
        .update(&path.into_inner(), &caller_id, patch)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Project updated successfully",
        "data": { "project": project }
    })))
}

#[delete("/{id}")]
pub async fn delete_project(
    claims: AuthClaims,
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let caller_id = claims.0.user_id()?;
    state
        .project_handler
        .delete(&path.into_inner(), &caller_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Project deleted successfully"
    })))
}
