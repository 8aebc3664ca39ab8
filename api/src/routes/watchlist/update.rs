use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::dto::watchlist::{WatchlistEntryRequest, WatchlistEntryResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;

use super::super::AppState;

/// Handler for PATCH /api/v1/list/{title_id}
///
/// Updates watch status and/or episode progress on the authenticated user's
/// entry. Another user's entry for the same title is indistinguishable from
/// no entry at all (404, never 403, so existence is not leaked).
///
/// # Request Body
///
/// ```json
/// {
///     "status": "completed",
///     "episodes_watched": 12
/// }
/// ```
///
/// # Response
///
/// - 200 OK with the updated entry
/// - 400 Bad Request: Episodes exceed the title's known total
/// - 401 Unauthorized: Missing or invalid access token
/// - 404 Not Found: No entry for this title on the user's list
pub async fn update<U, W, T, S, P>(
    req: HttpRequest,
    state: web::Data<AppState<U, W, T, S, P>>,
    auth: AuthContext,
    title_id: web::Path<Uuid>,
    request: web::Json<WatchlistEntryRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    W: WatchlistRepository + 'static,
    T: TitleRepository + 'static,
    S: SessionStoreTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    match state
        .watchlist_service
        .update_progress(auth.user_id, *title_id, request.into_inner().into())
        .await
    {
        Ok(entry) => HttpResponse::Ok().json(WatchlistEntryResponse::from(entry)),
        Err(error) => handle_domain_error(&req, &error),
    }
}
