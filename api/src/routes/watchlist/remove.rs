use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;

use super::super::AppState;

/// Handler for DELETE /api/v1/list/{title_id}
///
/// Removes a title from the authenticated user's watchlist. Idempotent:
/// deleting an absent entry succeeds.
///
/// # Response
///
/// - 204 No Content
/// - 401 Unauthorized: Missing or invalid access token
pub async fn remove<U, W, T, S, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, W, T, S, P>>,
    auth: AuthContext,
    title_id: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    W: WatchlistRepository + 'static,
    T: TitleRepository + 'static,
    S: SessionStoreTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    match state.watchlist_service.remove(auth.user_id, *title_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&req, &error),
    }
}
