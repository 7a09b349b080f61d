use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    // Literal segments before `/{id}` so "my" and "user" never parse as ids.
    cfg.service(
        web::scope("/projects")
            .service(projects::create_project)
            .service(projects::list_projects)
            .service(projects::my_projects)
            .service(projects::projects_by_user)
            .service(projects::get_project)
            .service(projects::update_project)
            .service(projects::delete_project)
    );
}
