use actix_web::web;

use crate::handlers::interactions;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/interactions")
            .service(interactions::toggle_like)
            .service(interactions::get_likes)
            .service(interactions::add_comment)
            .service(interactions::get_comments)
            .service(interactions::delete_comment)
    );
}
