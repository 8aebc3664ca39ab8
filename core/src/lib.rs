//! # AniWatch Core
//!
//! Core business logic and domain layer for the AniWatch backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, ListEntry, Title, TokenPair, TokenType, User, WatchStatus};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, WatchlistError};
pub use repositories::{TitleRepository, UserRepository, WatchlistRepository};
pub use services::{
    AuthService, AuthServiceConfig, BcryptPasswordHasher, PasswordHasherTrait, SessionRegistry,
    SessionStoreTrait, TokenConfig, TokenService, WatchlistService,
};
