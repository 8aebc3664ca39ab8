use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::{RefreshTokenRequest, TokenPairResponse};
use crate::handlers::error::handle_domain_error;

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;

use super::super::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a valid refresh token for a new access/refresh pair. The
/// presented token is dead afterwards (rotation). Presenting an
/// already-rotated token is treated as reuse of a stolen token: the whole
/// session is revoked and 401 returned.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "eyJ..."
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
/// - 401 Unauthorized: Invalid/expired token, or session revoked by reuse
///   detection
/// - 503 Service Unavailable: Session store unreachable (the refresh fails
///   closed, it is never assumed valid)
pub async fn refresh<U, W, T, S, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, W, T, S, P>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    W: WatchlistRepository + 'static,
    T: TitleRepository + 'static,
    S: SessionStoreTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(tokens) => HttpResponse::Ok().json(TokenPairResponse::from(tokens)),
        Err(error) => handle_domain_error(&req, &error),
    }
}
