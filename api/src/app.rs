//! Application factory
//!
//! Builds the Actix-web application with all middleware and routes wired to
//! a fully generic `AppState`, so tests can run the real HTTP surface over
//! in-memory implementations.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use crate::middleware::{auth::JwtAuth, cors::create_cors, request_id::RequestIdMiddleware};
use crate::routes::{
    auth::{login::login, logout::logout, refresh::refresh},
    users::{me::me, register::register},
    watchlist::{add::add, list::list, remove::remove, update::update},
    AppState,
};

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;
use aw_shared::types::response::ErrorBody;

/// Create and configure the application with all dependencies
pub fn create_app<U, W, T, S, P>(
    app_state: web::Data<AppState<U, W, T, S, P>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    W: WatchlistRepository + 'static,
    T: TitleRepository + 'static,
    S: SessionStoreTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    let cors = create_cors();
    let jwt = JwtAuth::new(app_state.token_service.clone());

    App::new()
        // Add application state
        .app_data(app_state)
        // Middleware (the outermost wrap is registered last: request ids are
        // assigned before anything else observes the request)
        .wrap(Logger::new(r#"%a "%r" %s %b %{x-request-id}o %Dms"#))
        .wrap(cors)
        .wrap(RequestIdMiddleware::new())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/users")
                        .route("", web::post().to(register::<U, W, T, S, P>))
                        .route(
                            "/me",
                            web::get().to(me::<U, W, T, S, P>).wrap(jwt.clone()),
                        ),
                )
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(login::<U, W, T, S, P>))
                        .route("/refresh", web::post().to(refresh::<U, W, T, S, P>))
                        .route(
                            "/logout",
                            web::post().to(logout::<U, W, T, S, P>).wrap(jwt.clone()),
                        ),
                )
                .service(
                    web::scope("/list")
                        .wrap(jwt)
                        .route("", web::get().to(list::<U, W, T, S, P>))
                        .route("/{title_id}", web::post().to(add::<U, W, T, S, P>))
                        .route("/{title_id}", web::patch().to(update::<U, W, T, S, P>))
                        .route("/{title_id}", web::delete().to(remove::<U, W, T, S, P>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "aniwatch-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(
        "not_found",
        "The requested resource was not found",
    ))
}
