use actix_web::web;

use crate::handlers::home::{health, home, not_found};

mod admin;
mod auth;
mod interactions;
mod json_error;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .service(health)
            .configure(auth::config_routes)
            .configure(projects::config_routes)
            .configure(interactions::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
    cfg.default_service(web::route().to(not_found));
}
