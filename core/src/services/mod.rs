//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod session;
pub mod token;
pub mod watchlist;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use password::{BcryptPasswordHasher, PasswordHasherTrait};
pub use session::{MockSessionStore, SessionRegistry, SessionStoreTrait};
pub use token::{TokenConfig, TokenService};
pub use watchlist::{ProgressUpdate, WatchlistService};
