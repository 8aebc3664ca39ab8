use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::dto::watchlist::{WatchlistEntryRequest, WatchlistEntryResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;

use super::super::AppState;

/// Handler for POST /api/v1/list/{title_id}
///
/// Adds a title to the authenticated user's watchlist. If the title is
/// already on the list the existing entry is returned unchanged; racing a
/// double-tap never creates a second entry or clobbers progress.
///
/// # Request Body
///
/// ```json
/// {
///     "status": "watching",
///     "episodes_watched": 3
/// }
/// ```
///
/// Both fields are optional; an empty body creates a `planned` entry with
/// zero episodes watched.
///
/// # Response
///
/// - 201 Created: A new entry was created
/// - 200 OK: The title was already on the list; existing entry returned
/// - 400 Bad Request: Seeded progress exceeds the title's episode count
/// - 404 Not Found: Unknown title
pub async fn add<U, W, T, S, P>(
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
        .add_or_get(auth.user_id, *title_id, request.into_inner().into())
        .await
    {
        Ok((entry, created)) => {
            let response = WatchlistEntryResponse::from(entry);
            if created {
                HttpResponse::Created().json(response)
            } else {
                HttpResponse::Ok().json(response)
            }
        }
        Err(error) => handle_domain_error(&req, &error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aw_core::domain::entities::watchlist::WatchStatus;

    #[test]
    fn test_request_body_with_seeded_progress() {
        let request: WatchlistEntryRequest =
            serde_json::from_str(r#"{"status": "watching", "episodes_watched": 3}"#).unwrap();

        assert_eq!(request.status, Some(WatchStatus::Watching));
        assert_eq!(request.episodes_watched, Some(3));
    }
}
