use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;

use crate::entities::interaction::{NewCommentRequest, PageQuery, DEFAULT_COMMENT_PAGE_SIZE};
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[post("/like/{project_id}")]
pub async fn toggle_like(
    claims: AuthClaims,
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = claims.0.user_id()?;
    let toggle = state
        .interaction_handler
        .toggle_like(&user_id, &path.into_inner())
        .await?;

    let message = if toggle.liked { "Project liked" } else { "Like removed" };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": message,
        "data": toggle
    })))
}

#[get("/likes/{project_id}")]
pub async fn get_likes(
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let (users, count) = state
        .interaction_handler
        .get_likes(&path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": {
            "users": users,
            "count": count
        }
    })))
}

#[post("/comment/{project_id}")]
pub async fn add_comment(
    claims: AuthClaims,
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
    body: web::Json<NewCommentRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = claims.0.user_id()?;
    let (comment_id, comments) = state
        .interaction_handler
        .add_comment(&path.into_inner(), &user_id, &body.content)
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "Comment added",
        "data": {
            "comment_id": comment_id,
            "comments": comments
        }
    })))
}

#[get("/comments/{project_id}")]
pub async fn get_comments(
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let (comments, count) = state
        .interaction_handler
        .get_comments(
            &path.into_inner(),
            query.limit_or(DEFAULT_COMMENT_PAGE_SIZE),
            query.offset(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": {
            "comments": comments,
            "count": count
        }
    })))
}

#[delete("/comment/{comment_id}")]
pub async fn delete_comment(
    claims: AuthClaims,
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = claims.0.user_id()?;
    state
        .interaction_handler
        .delete_comment(&path.into_inner(), &user_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Comment deleted"
    })))
}
