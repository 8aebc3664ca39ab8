use actix_web::{web, HttpRequest, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;

use super::super::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the authenticated user's session. Idempotent: logging out twice
/// is not an error. The access token used to authenticate this call stays
/// technically valid until it expires; only the refresh token dies now.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// # Response
///
/// - 204 No Content on success
/// - 401 Unauthorized: Missing or invalid access token
/// - 503 Service Unavailable: Session store unreachable
pub async fn logout<U, W, T, S, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, W, T, S, P>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    W: WatchlistRepository + 'static,
    T: TitleRepository + 'static,
    S: SessionStoreTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    match state.auth_service.logout(auth.user_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&req, &error),
    }
}
