//! HTTP middleware: authentication, request correlation, and CORS.

pub mod auth;
pub mod cors;
pub mod request_id;

pub use auth::{AuthContext, JwtAuth};
pub use request_id::{RequestId, RequestIdMiddleware};
