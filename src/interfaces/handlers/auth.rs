use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{get, post, put, web, Either, HttpResponse, Responder, ResponseError};
use uuid::Uuid;

use crate::entities::option_fields::OptionField;
use crate::entities::user::{LoginUser, NewUser, UpdateProfileRequest};
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

/// Multipart variant of the profile update: the same fields as the JSON
/// request plus the photo. Text fields have no null literal, so an empty
/// string clears a clearable field.
#[derive(Debug, MultipartForm)]
pub struct ProfileUploadForm {
    pub first_name: Option<Text<String>>,
    pub last_name: Option<Text<String>>,
    pub country: Option<Text<String>>,
    pub bio: Option<Text<String>>,
    pub skills: Option<Text<String>>,
    pub linkedin: Option<Text<String>>,
    pub twitter: Option<Text<String>>,
    pub website: Option<Text<String>>,
    #[multipart(limit = "5MiB")]
    pub profile_photo: Option<TempFile>,
}

impl ProfileUploadForm {
    fn into_request(self) -> (UpdateProfileRequest, Option<TempFile>) {
        let request = UpdateProfileRequest {
            first_name: non_empty(self.first_name),
            last_name: non_empty(self.last_name),
            country: non_empty(self.country),
            bio: OptionField::from_form_text(self.bio.map(Text::into_inner)),
            skills: OptionField::from_form_text(self.skills.map(Text::into_inner)),
            linkedin: OptionField::from_form_text(self.linkedin.map(Text::into_inner)),
            twitter: OptionField::from_form_text(self.twitter.map(Text::into_inner)),
            website: OptionField::from_form_text(self.website.map(Text::into_inner)),
        };
        (request, self.profile_photo)
    }
}

fn non_empty(text: Option<Text<String>>) -> Option<String> {
    text.map(Text::into_inner).filter(|s| !s.trim().is_empty())
}

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    user: web::Json<NewUser>,
) -> impl Responder {
    match state.auth_handler.register(user.into_inner()).await {
        Ok(response) => HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "message": "Registration successful",
            "data": response
        })),
        Err(e) => e.to_http_response(),
    }
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    user: web::Json<LoginUser>,
) -> impl Responder {
    match state.auth_handler.login(user.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Login successful",
            "data": response
        })),
        Err(e) => e.error_response(),
    }
}

#[get("/profile")]
pub async fn profile(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = claims.0.user_id()?;
    let user = state.auth_handler.get_profile(&user_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": { "user": user }
    })))
}

#[put("/profile")]
pub async fn update_profile(
    claims: AuthClaims,
    state: web::Data<AppState>,
    payload: Result<
        Either<MultipartForm<ProfileUploadForm>, web::Json<UpdateProfileRequest>>,
        actix_web::Error,
    >,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = claims.0.user_id()?;

    let either = match payload {
        Ok(either) => either,
        Err(e) => {
            return Ok(HttpResponse::UnsupportedMediaType().json(serde_json::json!({
                "success": false,
                "message": "Request must be application/json or multipart/form-data",
                "errors": [e.to_string()]
            })));
        }
    };

    let (request, photo_file) = match either {
        Either::Left(form) => form.into_inner().into_request(),
        Either::Right(json) => (json.into_inner(), None),
    };

    let profile_photo = match photo_file {
        Some(file) => Some(state.uploads.save_image(&file).await?),
        None => None,
    };

    let user = state
        .auth_handler
        .update_profile(&user_id, request, profile_photo)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Profile updated successfully",
        "data": { "user": user }
    })))
}

#[get("/user/{id}")]
pub async fn public_profile(
    path: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, actix_web::Error> {
    let user = state.auth_handler.get_public_profile(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": { "user": user }
    })))
}
