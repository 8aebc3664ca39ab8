use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::user::{CreateUserRequest, UserResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_error};

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;

use super::super::AppState;

/// Handler for POST /api/v1/users
///
/// Registers a new user with a login handle and password.
///
/// # Request Body
///
/// ```json
/// {
///     "login": "string (3-64 chars)",
///     "password": "string (8-128 chars)"
/// }
/// ```
///
/// # Response
///
/// - 201 Created with the new user's public fields
/// - 400 Bad Request: Validation failure
/// - 409 Conflict: Login already taken
pub async fn register<U, W, T, S, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, W, T, S, P>>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    W: WatchlistRepository + 'static,
    T: TitleRepository + 'static,
    S: SessionStoreTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(&req, &errors);
    }

    match state
        .auth_service
        .register(&request.login, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&req, &error),
    }
}
