//! Request and response data transfer objects.

pub mod auth;
pub mod user;
pub mod watchlist;

pub use auth::{LoginRequest, RefreshTokenRequest, TokenPairResponse};
pub use user::{CreateUserRequest, UserResponse};
pub use watchlist::{WatchlistEntryRequest, WatchlistEntryResponse};
