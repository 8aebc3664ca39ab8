//! Route handlers grouped by resource.

pub mod auth;
pub mod users;
pub mod watchlist;

use std::sync::Arc;

use aw_core::repositories::{TitleRepository, UserRepository, WatchlistRepository};
use aw_core::services::auth::AuthService;
use aw_core::services::password::PasswordHasherTrait;
use aw_core::services::session::SessionStoreTrait;
use aw_core::services::token::TokenService;
use aw_core::services::watchlist::WatchlistService;

/// Shared application state injected into every handler
pub struct AppState<U, W, T, S, P>
where
    U: UserRepository,
    W: WatchlistRepository,
    T: TitleRepository,
    S: SessionStoreTrait,
    P: PasswordHasherTrait,
{
    /// Authentication and session lifecycle
    pub auth_service: Arc<AuthService<U, S, P>>,
    /// Watchlist consistency enforcement
    pub watchlist_service: Arc<WatchlistService<W, T>>,
    /// Token verification for the request authorizer
    pub token_service: Arc<TokenService>,
}
