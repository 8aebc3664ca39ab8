//! Domain-specific error types and error handling.
//!
//! Error messages here are internal; user-facing wording (including
//! localization) is configured in the presentation layer. Token errors are
//! deliberately collapsed into a single undifferentiated message at the HTTP
//! boundary so that callers cannot probe which check failed.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown login or wrong password; the two cases are indistinguishable
    #[error("Invalid login or password")]
    InvalidCredentials,

    /// A user with the requested login handle already exists
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    /// Refresh token reuse detected or session explicitly revoked
    #[error("Session revoked")]
    SessionRevoked,

    #[error("Registration disabled")]
    RegistrationDisabled,
}

/// Token-related errors
///
/// The variants exist for internal logging; clients only ever see one
/// generic invalid-token response.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    /// e.g. a refresh token presented where an access token is expected
    #[error("Wrong token type")]
    WrongTokenType,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Watchlist-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WatchlistError {
    /// No entry for the (user, title) pair; also returned when the entry
    /// belongs to another user, to avoid leaking existence
    #[error("Watchlist entry not found")]
    EntryNotFound,

    #[error("Invalid progress: {episodes} of {total} episodes")]
    InvalidProgress { episodes: u32, total: u32 },

    /// An entry for the (user, title) pair already exists
    #[error("Watchlist entry already exists")]
    DuplicateEntry,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Persistence or session-store I/O failure. Always fail closed: a store
    /// outage must never be treated as "session valid".
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Watchlist(#[from] WatchlistError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_bridging() {
        let err: DomainError = AuthError::SessionRevoked.into();
        assert_eq!(err.to_string(), "Session revoked");

        let err: DomainError = TokenError::TokenExpired.into();
        assert_eq!(err.to_string(), "Token expired");
    }

    #[test]
    fn test_invalid_progress_message() {
        let err = WatchlistError::InvalidProgress {
            episodes: 20,
            total: 12,
        };
        assert_eq!(err.to_string(), "Invalid progress: 20 of 12 episodes");
    }
}
