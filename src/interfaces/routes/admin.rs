use actix_web::web;

use crate::handlers::admin;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(admin::statistics)
            .service(admin::list_users)
            .service(admin::delete_user)
            .service(admin::list_projects)
            .service(admin::delete_project)
    );
}
