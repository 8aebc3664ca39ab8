//! Authentication service tests covering the session lifecycle:
//! login, rotation, reuse detection, and fail-closed store handling.

use std::sync::Arc;

use crate::domain::entities::token::TokenType;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::MockUserRepository;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::password::BcryptPasswordHasher;
use crate::services::session::MockSessionStore;
use crate::services::token::{TokenConfig, TokenService};

type TestAuthService = AuthService<MockUserRepository, MockSessionStore, BcryptPasswordHasher>;

struct TestHarness {
    auth_service: TestAuthService,
    session_store: Arc<MockSessionStore>,
    token_service: Arc<TokenService>,
}

fn harness() -> TestHarness {
    harness_with_config(AuthServiceConfig::default())
}

fn harness_with_config(config: AuthServiceConfig) -> TestHarness {
    let user_repository = Arc::new(MockUserRepository::new());
    let session_store = Arc::new(MockSessionStore::new());
    // Minimum bcrypt cost keeps the tests fast
    let password_hasher = Arc::new(BcryptPasswordHasher::with_cost(4));
    let token_service = Arc::new(TokenService::new(TokenConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    }));

    TestHarness {
        auth_service: AuthService::new(
            user_repository,
            session_store.clone(),
            password_hasher,
            token_service.clone(),
            config,
        ),
        session_store,
        token_service,
    }
}

#[tokio::test]
async fn test_register_then_login() {
    let h = harness();

    let user = h
        .auth_service
        .register("shinji", "correct horse battery staple")
        .await
        .unwrap();

    let tokens = h
        .auth_service
        .login("shinji", "correct horse battery staple")
        .await
        .unwrap();

    // The issued access token resolves to the same user
    let claims = h
        .token_service
        .verify(&tokens.access_token, TokenType::Access)
        .unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
}

#[tokio::test]
async fn test_register_rejects_duplicate_login() {
    let h = harness();
    h.auth_service.register("rei", "password-one").await.unwrap();

    let result = h.auth_service.register("rei", "password-two").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}

#[tokio::test]
async fn test_registration_can_be_disabled() {
    let h = harness_with_config(AuthServiceConfig {
        registration_enabled: false,
    });

    let result = h.auth_service.register("asuka", "password").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::RegistrationDisabled))
    ));
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let h = harness();
    h.auth_service.register("misato", "right").await.unwrap();

    let result = h.auth_service.login("misato", "wrong").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_login_rejects_unknown_handle_identically() {
    let h = harness();

    let result = h.auth_service.login("nobody", "whatever").await;

    // Unknown login and wrong password are the same error
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_refresh_rotates_the_pair() {
    let h = harness();
    h.auth_service.register("kaji", "password").await.unwrap();
    let first = h.auth_service.login("kaji", "password").await.unwrap();

    let second = h
        .auth_service
        .refresh(&first.refresh_token)
        .await
        .unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);

    // The rotated pair works
    let third = h
        .auth_service
        .refresh(&second.refresh_token)
        .await
        .unwrap();
    assert_ne!(second.refresh_token, third.refresh_token);
}

#[tokio::test]
async fn test_refresh_reuse_revokes_whole_session() {
    let h = harness();
    h.auth_service.register("gendo", "password").await.unwrap();
    let first = h.auth_service.login("gendo", "password").await.unwrap();

    // First rotation succeeds
    let second = h
        .auth_service
        .refresh(&first.refresh_token)
        .await
        .unwrap();

    // Replaying the already-rotated token is reuse
    let replay = h.auth_service.refresh(&first.refresh_token).await;
    assert!(matches!(
        replay,
        Err(DomainError::Auth(AuthError::SessionRevoked))
    ));

    // The reuse detection cleared the registry, so the token from the first
    // rotation is dead too
    let collateral = h.auth_service.refresh(&second.refresh_token).await;
    assert!(matches!(
        collateral,
        Err(DomainError::Auth(AuthError::SessionRevoked))
    ));
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let h = harness();
    h.auth_service.register("ritsuko", "password").await.unwrap();
    let tokens = h.auth_service.login("ritsuko", "password").await.unwrap();

    let result = h.auth_service.refresh(&tokens.access_token).await;

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::WrongTokenType))
    ));
}

#[tokio::test]
async fn test_login_discards_prior_session() {
    let h = harness();
    h.auth_service.register("toji", "password").await.unwrap();

    let first = h.auth_service.login("toji", "password").await.unwrap();
    let _second = h.auth_service.login("toji", "password").await.unwrap();

    // The first session's refresh token was superseded by the second login
    let result = h.auth_service.refresh(&first.refresh_token).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::SessionRevoked))
    ));
}

#[tokio::test]
async fn test_logout_is_idempotent_and_kills_refresh() {
    let h = harness();
    let user = h.auth_service.register("kensuke", "password").await.unwrap();
    let tokens = h.auth_service.login("kensuke", "password").await.unwrap();

    h.auth_service.logout(user.id).await.unwrap();
    h.auth_service.logout(user.id).await.unwrap();

    let result = h.auth_service.refresh(&tokens.refresh_token).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::SessionRevoked))
    ));
}

#[tokio::test]
async fn test_refresh_fails_closed_on_store_outage() {
    let h = harness();
    h.auth_service.register("hikari", "password").await.unwrap();
    let tokens = h.auth_service.login("hikari", "password").await.unwrap();

    h.session_store.set_failing(true);

    let result = h.auth_service.refresh(&tokens.refresh_token).await;
    assert!(matches!(
        result,
        Err(DomainError::StoreUnavailable { .. })
    ));

    // Recovery: the session is still intact once the store is back
    h.session_store.set_failing(false);
    assert!(h.auth_service.refresh(&tokens.refresh_token).await.is_ok());
}

#[tokio::test]
async fn test_login_fails_closed_on_store_outage() {
    let h = harness();
    h.auth_service.register("pen-pen", "password").await.unwrap();

    h.session_store.set_failing(true);

    let result = h.auth_service.login("pen-pen", "password").await;
    assert!(matches!(
        result,
        Err(DomainError::StoreUnavailable { .. })
    ));
}
