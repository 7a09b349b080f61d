mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod graceful_shutdown;

pub use domain::{entities, password, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, db, uploads};

use auth::jwt::JwtService;
use repositories::sqlx_repo::{SqlxAdminRepo, SqlxInteractionRepo, SqlxProjectRepo, SqlxUserRepo};
use uploads::store::UploadStore;
use use_cases::admin::AdminHandler;
use use_cases::auth::AuthHandler;
use use_cases::interactions::InteractionHandler;
use use_cases::projects::ProjectHandler;

pub type AppAuthHandler = AuthHandler<SqlxUserRepo>;
pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo, SqlxInteractionRepo>;
pub type AppInteractionHandler = InteractionHandler<SqlxInteractionRepo, SqlxProjectRepo>;
pub type AppAdminHandler = AdminHandler<SqlxAdminRepo, SqlxUserRepo, SqlxProjectRepo>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub project_handler: AppProjectHandler,
    pub interaction_handler: AppInteractionHandler,
    pub admin_handler: AppAdminHandler,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> std::io::Result<Self> {
        let jwt_service = JwtService::new(config);

        let auth_handler = AuthHandler::new(SqlxUserRepo::new(pool.clone()), jwt_service);
        let project_handler = ProjectHandler::new(
            SqlxProjectRepo::new(pool.clone()),
            SqlxInteractionRepo::new(pool.clone()),
        );
        let interaction_handler = InteractionHandler::new(
            SqlxInteractionRepo::new(pool.clone()),
            SqlxProjectRepo::new(pool.clone()),
        );
        let admin_handler = AdminHandler::new(
            SqlxAdminRepo::new(pool.clone()),
            SqlxUserRepo::new(pool.clone()),
            SqlxProjectRepo::new(pool),
        );

        let uploads = UploadStore::new(config)?;

        Ok(AppState {
            auth_handler,
            project_handler,
            interaction_handler,
            admin_handler,
            uploads,
        })
    }
}
