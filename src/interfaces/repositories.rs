pub mod admin;
pub mod interaction;
pub mod project;
pub mod sqlx_repo;
pub mod user;
