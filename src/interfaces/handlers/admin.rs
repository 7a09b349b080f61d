use actix_web::{delete, get, web, HttpResponse};
use uuid::Uuid;

use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

#[get("/statistics")]
pub async fn statistics(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let statistics = state.admin_handler.statistics().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "statistics": statistics
    })))
}

#[get("/users")]
pub async fn list_users(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let users = state.admin_handler.list_users().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "users": users
    })))
}

#[delete("/users/{id}")]
pub async fn delete_user(
    claims: AdminClaims,
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let caller_id = claims.0.user_id()?;
    state
        .admin_handler
        .delete_user(&path.into_inner(), &caller_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "User deleted successfully"
    })))
}

#[get("/projects")]
pub async fn list_projects(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let projects = state.admin_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "projects": projects
    })))
}

#[delete("/projects/{id}")]
pub async fn delete_project(
    claims: AdminClaims,
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let caller_id = claims.0.user_id()?;
    state
        .admin_handler
        .delete_project(&path.into_inner(), &caller_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Project deleted successfully"
    })))
}
