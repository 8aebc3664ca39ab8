//! Integration tests for the watchlist endpoints
//!
//! Covers the consistency model end-to-end: idempotent add, progress
//! validation against the catalog's episode counts, ownership enforcement,
//! and idempotent removal.

use actix_web::{http::header, test, web};
use std::sync::Arc;
use uuid::Uuid;

use aw_api::app::create_app;
use aw_api::routes::AppState;
use aw_core::domain::entities::title::Title;
use aw_core::repositories::{MockTitleRepository, MockUserRepository, MockWatchlistRepository};
use aw_core::services::auth::{AuthService, AuthServiceConfig};
use aw_core::services::password::BcryptPasswordHasher;
use aw_core::services::session::MockSessionStore;
use aw_core::services::token::{TokenConfig, TokenService};
use aw_core::services::watchlist::WatchlistService;

type TestState = AppState<
    MockUserRepository,
    MockWatchlistRepository,
    MockTitleRepository,
    MockSessionStore,
    BcryptPasswordHasher,
>;

fn test_state() -> (web::Data<TestState>, Arc<MockTitleRepository>) {
    let user_repository = Arc::new(MockUserRepository::new());
    let watchlist_repository = Arc::new(MockWatchlistRepository::new());
    let title_repository = Arc::new(MockTitleRepository::new());
    let session_store = Arc::new(MockSessionStore::new());
    let password_hasher = Arc::new(BcryptPasswordHasher::with_cost(4));
    let token_service = Arc::new(TokenService::new(TokenConfig {
        jwt_secret: "integration-test-secret".to_string(),
        ..Default::default()
    }));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        session_store,
        password_hasher,
        token_service.clone(),
        AuthServiceConfig::default(),
    ));
    let watchlist_service = Arc::new(WatchlistService::new(
        watchlist_repository,
        title_repository.clone(),
    ));

    (
        web::Data::new(AppState {
            auth_service,
            watchlist_service,
            token_service,
        }),
        title_repository,
    )
}

/// Register a user and return a bearer access token for them
async fn bearer_for<S, B>(app: &S, login: &str) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(serde_json::json!({"login": login, "password": "a long password"}))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({"login": login, "password": "a long password"}))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 200);
    let tokens: serde_json::Value = test::read_body_json(resp).await;

    format!("Bearer {}", tokens["access_token"].as_str().unwrap())
}

#[actix_web::test]
async fn test_add_then_get_list() {
    let (state, titles) = test_state();
    let title_id = titles
        .insert(Title::new("Cowboy Bebop".to_string(), None, Some(26)))
        .await;
    let app = test::init_service(create_app(state)).await;
    let bearer = bearer_for(&app, "shinji").await;

    // Empty body creates the default entry
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let entry: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(entry["status"], "planned");
    assert_eq!(entry["episodes_watched"], 0);

    let req = test::TestRequest::get()
        .uri("/api/v1/list")
        .insert_header((header::AUTHORIZATION, bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let list: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["title_id"], title_id.to_string());
}

#[actix_web::test]
async fn test_adding_twice_returns_existing_entry() {
    let (state, titles) = test_state();
    let title_id = titles
        .insert(Title::new("Monster".to_string(), None, Some(74)))
        .await;
    let app = test::init_service(create_app(state)).await;
    let bearer = bearer_for(&app, "rei").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .set_json(serde_json::json!({"status": "watching", "episodes_watched": 10}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // Second add returns 200 with the stored entry, unchanged by the new body
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer))
        .set_json(serde_json::json!({"status": "dropped", "episodes_watched": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let entry: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(entry["status"], "watching");
    assert_eq!(entry["episodes_watched"], 10);
}

#[actix_web::test]
async fn test_progress_validation_against_total() {
    let (state, titles) = test_state();
    let title_id = titles
        .insert(Title::new("Cowboy Bebop".to_string(), None, Some(12)))
        .await;
    let app = test::init_service(create_app(state)).await;
    let bearer = bearer_for(&app, "asuka").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .set_json(serde_json::json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    // Within the total: accepted
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .set_json(serde_json::json!({"episodes_watched": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let entry: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(entry["episodes_watched"], 5);

    // Beyond the total: rejected
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer))
        .set_json(serde_json::json!({"episodes_watched": 20}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_progress");
}

#[actix_web::test]
async fn test_unknown_total_accepts_any_progress() {
    let (state, titles) = test_state();
    let title_id = titles
        .insert(Title::new("One Piece".to_string(), None, None))
        .await;
    let app = test::init_service(create_app(state)).await;
    let bearer = bearer_for(&app, "misato").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .set_json(serde_json::json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer))
        .set_json(serde_json::json!({"episodes_watched": 1000}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_web::test]
async fn test_foreign_entry_is_404() {
    let (state, titles) = test_state();
    let title_id = titles
        .insert(Title::new("Monster".to_string(), None, Some(74)))
        .await;
    let app = test::init_service(create_app(state)).await;
    let bearer_a = bearer_for(&app, "user-a").await;
    let bearer_b = bearer_for(&app, "user-b").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer_a))
        .set_json(serde_json::json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    // User B sees nothing of user A's entry
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer_b.clone()))
        .set_json(serde_json::json!({"status": "completed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::get()
        .uri("/api/v1/list")
        .insert_header((header::AUTHORIZATION, bearer_b))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let list: serde_json::Value = test::read_body_json(resp).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_unknown_title_is_404() {
    let (state, _titles) = test_state();
    let app = test::init_service(create_app(state)).await;
    let bearer = bearer_for(&app, "kaji").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/list/{}", Uuid::new_v4()))
        .insert_header((header::AUTHORIZATION, bearer))
        .set_json(serde_json::json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_remove_is_idempotent() {
    let (state, titles) = test_state();
    let title_id = titles
        .insert(Title::new("Akira".to_string(), None, Some(1)))
        .await;
    let app = test::init_service(create_app(state)).await;
    let bearer = bearer_for(&app, "gendo").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .set_json(serde_json::json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/list/{}", title_id))
        .insert_header((header::AUTHORIZATION, bearer))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);
}

#[actix_web::test]
async fn test_list_requires_authentication() {
    let (state, _titles) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/v1/list").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}
