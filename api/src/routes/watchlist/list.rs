use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::watchlist::WatchlistEntryResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;

use super::super::AppState;

/// Handler for GET /api/v1/list
///
/// Returns every entry on the authenticated user's watchlist.
///
/// # Response
///
/// - 200 OK with an array of entries
/// - 401 Unauthorized: Missing or invalid access token
pub async fn list<U, W, T, S, P>(
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
    match state.watchlist_service.list_for_user(auth.user_id).await {
        Ok(entries) => {
            let response: Vec<WatchlistEntryResponse> = entries
                .into_iter()
                .map(WatchlistEntryResponse::from)
                .collect();
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(&req, &error),
    }
}
