//! Request correlation middleware.
//!
//! The edge proxy propagates a correlation identifier in `x-request-id`;
//! this middleware accepts it (generating one when absent or unusable),
//! exposes it to handlers through request extensions, and echoes it on every
//! response so log lines and error bodies can be tied back to the proxy's
//! records.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

/// Header carrying the request correlation identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest accepted inbound correlation id; longer values are replaced
const MAX_REQUEST_ID_LEN: usize = 64;

/// Correlation identifier attached to the current request
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Fetch the correlation id recorded for a request, if the middleware ran
pub fn request_id(req: &HttpRequest) -> Option<String> {
    req.extensions().get::<RequestId>().map(|id| id.0.clone())
}

/// Request correlation middleware factory
#[derive(Clone, Default)]
pub struct RequestIdMiddleware;

impl RequestIdMiddleware {
    /// Creates a new request correlation middleware
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdService {
            service: Rc::new(service),
        }))
    }
}

/// Request correlation middleware service
pub struct RequestIdService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdService<S>
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

        let id = incoming_request_id(&req).unwrap_or_else(|| Uuid::new_v4().to_string());
        req.extensions_mut().insert(RequestId(id.clone()));

        Box::pin(async move {
            let mut res = service.call(req).await?;

            if let Ok(value) = HeaderValue::from_str(&id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }

            Ok(res)
        })
    }
}

/// Accept the proxy's correlation id when it is usable as-is
fn incoming_request_id(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?;
    if value.is_empty() || value.len() > MAX_REQUEST_ID_LEN {
        return None;
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_incoming_request_id_accepted() {
        let req = TestRequest::default()
            .insert_header((REQUEST_ID_HEADER, "req-abc-123"))
            .to_srv_request();

        assert_eq!(incoming_request_id(&req), Some("req-abc-123".to_string()));
    }

    #[test]
    fn test_incoming_request_id_rejects_garbage() {
        let req = TestRequest::default()
            .insert_header((REQUEST_ID_HEADER, "bad id with spaces"))
            .to_srv_request();

        assert_eq!(incoming_request_id(&req), None);

        let req = TestRequest::default()
            .insert_header((REQUEST_ID_HEADER, "x".repeat(100)))
            .to_srv_request();

        assert_eq!(incoming_request_id(&req), None);
    }

    #[test]
    fn test_missing_header_yields_none() {
        let req = TestRequest::default().to_srv_request();
        assert_eq!(incoming_request_id(&req), None);
    }
}
