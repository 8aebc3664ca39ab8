//! Repository interfaces for persistence, with in-memory mocks for tests.

pub mod title;
pub mod user;
pub mod watchlist;

pub use title::{MockTitleRepository, TitleRepository};
pub use user::{MockUserRepository, UserRepository};
pub use watchlist::{MockWatchlistRepository, WatchlistRepository};
