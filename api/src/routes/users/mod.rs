//! User route handlers: registration and current-user lookup.

pub mod me;
pub mod register;
