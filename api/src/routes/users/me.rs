use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::user::UserResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;

use super::super::AppState;

/// Handler for GET /api/v1/users/me
///
/// Returns the authenticated user's public record.
///
/// # Response
///
/// - 200 OK with the user's public fields
/// - 401 Unauthorized: Missing or invalid access token
/// - 404 Not Found: The account no longer exists or was deactivated
pub async fn me<U, W, T, S, P>(
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
    match state.auth_service.current_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&req, &error),
    }
}
