use actix_web::{get, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Showcase Web API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    let uptime = Utc::now().signed_duration_since(*START_TIME);

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Showcase API is up",
        "uptime_secs": uptime.num_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Catch-all for unmatched routes, so every path answers JSON.
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "message": "Route not found"
    }))
}
