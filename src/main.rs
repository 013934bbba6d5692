pub mod modules;
pub use modules::auth;
pub use modules::category;
pub use modules::recipe;
pub mod health;
mod api;
mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{
    TokenRepositoryPostgres, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::services::TokenIssuer;
use crate::auth::application::use_cases::{
    authenticate_token::{AuthenticateTokenUseCase, IAuthenticateTokenUseCase},
    obtain_token::{IObtainTokenUseCase, ObtainTokenUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::category::adapter::outgoing::{CategoryQueryPostgres, CategoryRepositoryPostgres};
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::services::{
    CreateCategoryService, DeleteCategoryService, GetCategoriesService,
};
use crate::recipe::adapter::outgoing::{RecipeQueryPostgres, RecipeRepositoryPostgres};
use crate::recipe::application::recipe_use_cases::RecipeUseCases;
use crate::recipe::application::service::{
    CreateRecipeService, DeleteRecipeService, GetRecipesService, GetSingleRecipeService,
    UpdateRecipeService,
};
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub obtain_token_use_case: Arc<dyn IObtainTokenUseCase + Send + Sync>,
    pub authenticate_token_use_case: Arc<dyn IAuthenticateTokenUseCase + Send + Sync>,
    pub user_identity_resolver: UserIdentityResolver,
    pub category: CategoryUseCases,
    pub recipe: RecipeUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_state(db: &Arc<DatabaseConnection>, config: &AppConfig) -> anyhow::Result<AppState> {
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let token_repo = Arc::new(TokenRepositoryPostgres::new(Arc::clone(db)));
    let password_hasher = Arc::new(
        Argon2Hasher::from_config(&config.argon2)
            .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {}", e))?,
    );
    let token_issuer = TokenIssuer::new(token_repo.clone());

    let register_user_use_case =
        RegisterUserUseCase::new(user_query.clone(), user_repo, password_hasher.clone());
    let obtain_token_use_case =
        ObtainTokenUseCase::new(user_query.clone(), password_hasher, token_issuer);
    let authenticate_token_use_case = AuthenticateTokenUseCase::new(token_repo);

    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(db));
    let category_query = CategoryQueryPostgres::new(Arc::clone(db));
    let category = CategoryUseCases {
        create: Arc::new(CreateCategoryService::new(category_repo.clone())),
        get_list: Arc::new(GetCategoriesService::new(category_query.clone())),
        delete: Arc::new(DeleteCategoryService::new(category_repo)),
    };

    let recipe_repo = RecipeRepositoryPostgres::new(Arc::clone(db));
    let recipe_query = RecipeQueryPostgres::new(Arc::clone(db));
    let recipe = RecipeUseCases {
        create: Arc::new(CreateRecipeService::new(
            recipe_repo.clone(),
            recipe_query.clone(),
            category_query.clone(),
        )),
        get_list: Arc::new(GetRecipesService::new(recipe_query.clone())),
        get_single: Arc::new(GetSingleRecipeService::new(recipe_query.clone())),
        update: Arc::new(UpdateRecipeService::new(
            recipe_repo.clone(),
            recipe_query,
            category_query,
        )),
        delete: Arc::new(DeleteRecipeService::new(recipe_repo)),
    };

    Ok(AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        obtain_token_use_case: Arc::new(obtain_token_use_case),
        authenticate_token_use_case: Arc::new(authenticate_token_use_case),
        user_identity_resolver: UserIdentityResolver::new(Arc::new(user_query)),
        category,
        recipe,
    })
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    AppConfig::load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);
    let state = build_state(&db_arc, &config)?;
    let openapi = ApiDoc::openapi();

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::obtain_token_handler);
    // Categories
    cfg.service(crate::category::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::create_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::delete_category_handler);
    // Recipes
    cfg.service(crate::recipe::adapter::incoming::web::routes::get_recipes_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::get_single_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::create_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::update_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::patch_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::delete_recipe_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
