use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use std::sync::Arc;

mod app;
mod dto;
mod handlers;
mod middleware;
mod routes;

use aw_core::services::auth::{AuthService, AuthServiceConfig};
use aw_core::services::password::BcryptPasswordHasher;
use aw_core::services::token::{TokenConfig, TokenService};
use aw_core::services::watchlist::WatchlistService;
use aw_infra::cache::{RedisClient, RedisSessionStore};
use aw_infra::database::{
    create_pool, MySqlTitleRepository, MySqlUserRepository, MySqlWatchlistRepository,
};
use aw_shared::config::{AuthConfig, CacheConfig, DatabaseConfig, Environment, ServerConfig};

use crate::routes::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting AniWatch API Server");

    // Load configuration
    let environment = Environment::from_env();
    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let cache_config = CacheConfig::from_env();
    let auth_config = AuthConfig::from_env();

    if auth_config.jwt.is_using_default_secret() {
        if environment.is_production() {
            panic!("JWT_SECRET must be set in production");
        }
        warn!("Using the default JWT secret; set JWT_SECRET before deploying");
    }

    // Persistence
    let pool = create_pool(&database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    // Session store
    let redis_client = RedisClient::new(cache_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let session_store = Arc::new(RedisSessionStore::new(redis_client));

    // Repositories
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let title_repository = Arc::new(MySqlTitleRepository::new(pool.clone()));
    let watchlist_repository = Arc::new(MySqlWatchlistRepository::new(pool));

    // Services
    let token_service = Arc::new(TokenService::new(TokenConfig::from(&auth_config.jwt)));
    let password_hasher = Arc::new(BcryptPasswordHasher::new());
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        session_store,
        password_hasher,
        token_service.clone(),
        AuthServiceConfig::default(),
    ));
    let watchlist_service = Arc::new(WatchlistService::new(
        watchlist_repository,
        title_repository,
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        watchlist_service,
        token_service,
    });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || app::create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
