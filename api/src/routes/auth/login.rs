use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, TokenPairResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_error};

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;

use super::super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates a user with login and password and opens a session,
/// returning a fresh access/refresh token pair. Any prior session for the
/// user is discarded (single active session per user).
///
/// # Request Body
///
/// ```json
/// {
///     "login": "string",
///     "password": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "token_type": "bearer",
///     "expires_in": 900
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown login or wrong password (indistinguishable)
/// - 503 Service Unavailable: Session store unreachable
pub async fn login<U, W, T, S, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, W, T, S, P>>,
    request: web::Json<LoginRequest>,
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

    match state.auth_service.login(&request.login, &request.password).await {
        Ok(tokens) => HttpResponse::Ok().json(TokenPairResponse::from(tokens)),
        Err(error) => handle_domain_error(&req, &error),
    }
}
