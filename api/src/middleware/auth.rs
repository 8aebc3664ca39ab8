//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it as an access token, and injects the resolved user identity
//! into the request extensions for downstream handlers.
//!
//! The session registry is deliberately not consulted here: access tokens
//! are self-contained and not revocable mid-lifetime. Revocation takes
//! effect at the next refresh, bounded by the access token TTL.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use aw_core::domain::entities::token::{Claims, TokenType};
use aw_core::errors::{DomainError, TokenError};
use aw_core::services::token::TokenService;
use aw_shared::types::response::ErrorBody;

use super::request_id::RequestId;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// JWT ID of the presented access token
    pub jti: String,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;
        Ok(Self {
            user_id,
            jti: claims.jti,
        })
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = self.token_service.clone();

        Box::pin(async move {
            // Extract token from Authorization header
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(unauthorized(&req)),
            };

            // Verify as an access token; the specific failure is logged but
            // never differentiated to the client
            let auth_context = match token_service.verify(&token, TokenType::Access) {
                Ok(claims) => match AuthContext::from_claims(claims) {
                    Ok(context) => context,
                    Err(e) => {
                        log::debug!("access token has unusable claims: {}", e);
                        return Err(unauthorized(&req));
                    }
                },
                Err(e) => {
                    log::debug!("access token rejected: {}", e);
                    return Err(unauthorized(&req));
                }
            };

            // Inject auth context into request extensions
            req.extensions_mut().insert(auth_context);

            // Continue with the request
            service.call(req).await
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Builds the single generic 401 used for every authorization failure
fn unauthorized(req: &ServiceRequest) -> Error {
    let mut body = ErrorBody::new("invalid_token", "Invalid or expired access token");
    if let Some(id) = req.extensions().get::<RequestId>() {
        body = body.with_request_id(id.0.clone());
    }
    InternalError::from_response("unauthorized", HttpResponse::Unauthorized().json(body)).into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req.extensions().get::<AuthContext>().cloned().ok_or_else(|| {
            let body = ErrorBody::new("invalid_token", "Authentication required");
            InternalError::from_response(
                "unauthorized",
                HttpResponse::Unauthorized().json(body),
            )
            .into()
        });

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_auth_context_from_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, TokenType::Access, 900);

        let context = AuthContext::from_claims(claims.clone()).unwrap();
        assert_eq!(context.user_id, user_id);
        assert_eq!(context.jti, claims.jti);
    }

    #[test]
    fn test_auth_context_rejects_bad_subject() {
        let mut claims = Claims::new(Uuid::new_v4(), TokenType::Access, 900);
        claims.sub = "not-a-uuid".to_string();

        assert!(AuthContext::from_claims(claims).is_err());
    }
}
