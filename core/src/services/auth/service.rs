//! Main authentication service implementation

use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::token::{TokenPair, TokenType};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasherTrait;
use crate::services::session::{SessionRegistry, SessionStoreTrait};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service for managing the session lifecycle
///
/// A session moves through `unauthenticated → authenticated → rotated →
/// revoked`. The registry holds the single active refresh jti per user, so
/// every transition is observable by all server instances.
pub struct AuthService<U, S, P>
where
    U: UserRepository,
    S: SessionStoreTrait,
    P: PasswordHasherTrait,
{
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Registry of active refresh tokens
    session_registry: SessionRegistry<S>,
    /// Pluggable password hashing capability
    password_hasher: Arc<P>,
    /// Token issuance and verification
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, S, P> AuthService<U, S, P>
where
    U: UserRepository,
    S: SessionStoreTrait,
    P: PasswordHasherTrait,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `session_store` - TTL-capable store backing the session registry
    /// * `password_hasher` - Password hashing capability
    /// * `token_service` - Service for JWT issuance and verification
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        session_store: Arc<S>,
        password_hasher: Arc<P>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            session_registry: SessionRegistry::new(session_store),
            password_hasher,
            token_service,
            config,
        }
    }

    /// Register a new user
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Duplicate login, registration disabled, or
    ///   persistence failure
    pub async fn register(&self, login: &str, password: &str) -> DomainResult<User> {
        if !self.config.registration_enabled {
            return Err(DomainError::Auth(AuthError::RegistrationDisabled));
        }

        // Step 1: Reject duplicate login handles early; the unique constraint
        // on the login column catches the remaining race
        if self.user_repository.find_by_login(login).await?.is_some() {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        // Step 2: Hash the password and persist
        let password_hash = self.password_hasher.hash(password)?;
        let user = self
            .user_repository
            .create(User::new(login.to_string(), password_hash))
            .await?;

        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticate a user and open a session
    ///
    /// Issues a fresh access/refresh pair and registers the refresh jti,
    /// discarding any prior session for the user (single active session).
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The new session's tokens
    /// * `Err(DomainError)` - `InvalidCredentials` on unknown login, wrong
    ///   password, or a deactivated account; `StoreUnavailable` if the
    ///   session registry is unreachable
    pub async fn login(&self, login: &str, password: &str) -> DomainResult<TokenPair> {
        // Step 1: Look up the user; unknown handle and wrong password are
        // indistinguishable to the caller
        let user = match self.user_repository.find_by_login(login).await? {
            Some(user) if user.is_active => user,
            _ => return Err(DomainError::Auth(AuthError::InvalidCredentials)),
        };

        // Step 2: Verify the password against the stored digest
        if !self.password_hasher.verify(password, &user.password_hash)? {
            debug!(user_id = %user.id, "password mismatch");
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        // Step 3: Issue a fresh pair and register its refresh jti
        let tokens = self.open_session(user.id).await?;

        info!(user_id = %user.id, "login succeeded");
        Ok(tokens)
    }

    /// Exchange a refresh token for a new access/refresh pair (rotation)
    ///
    /// A refresh token whose jti no longer matches the registered one is
    /// treated as reuse of a stolen, already-rotated token: the whole session
    /// is revoked and the call fails with `SessionRevoked`.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The rotated pair; the presented token is now dead
    /// * `Err(DomainError)` - Token verification failure, `SessionRevoked`,
    ///   or `StoreUnavailable` (fail closed)
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        // Step 1: Verify signature, expiry, and type
        let claims = self
            .token_service
            .verify(refresh_token, TokenType::Refresh)?;
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;

        // Step 2: The registry decides whether this jti is still the active
        // one. A store failure propagates here: never assume validity.
        if !self.session_registry.is_active(user_id, &claims.jti).await? {
            warn!(
                user_id = %user_id,
                jti = %claims.jti,
                "refresh token reuse detected, revoking session"
            );
            self.session_registry.revoke(user_id).await?;
            return Err(DomainError::Auth(AuthError::SessionRevoked));
        }

        // Step 3: The user must still exist and be active
        match self.user_repository.find_by_id(user_id).await? {
            Some(user) if user.is_active => {}
            _ => {
                self.session_registry.revoke(user_id).await?;
                return Err(DomainError::Auth(AuthError::SessionRevoked));
            }
        }

        // Step 4: Rotate. The new registration atomically supersedes the
        // presented token
        let tokens = self.open_session(user_id).await?;

        debug!(user_id = %user_id, "refresh token rotated");
        Ok(tokens)
    }

    /// Close the user's session; idempotent
    pub async fn logout(&self, user_id: Uuid) -> DomainResult<()> {
        self.session_registry.revoke(user_id).await?;
        info!(user_id = %user_id, "logout");
        Ok(())
    }

    /// Load the authenticated user's record
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<User> {
        match self.user_repository.find_by_id(user_id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(DomainError::NotFound {
                resource: "User".to_string(),
            }),
        }
    }

    /// Issue an access/refresh pair and register the refresh jti
    async fn open_session(&self, user_id: Uuid) -> DomainResult<TokenPair> {
        let access_token = self.token_service.issue_access(user_id)?;
        let (refresh_token, refresh_claims) = self.token_service.issue_refresh(user_id)?;

        self.session_registry
            .register(
                user_id,
                &refresh_claims.jti,
                self.token_service.refresh_expiry_seconds() as u64,
            )
            .await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.token_service.access_expiry_seconds(),
            self.token_service.refresh_expiry_seconds(),
        ))
    }
}
