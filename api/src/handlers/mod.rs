//! Request handling support: domain-error-to-HTTP mapping.

pub mod error;

pub use error::{extract_language, handle_domain_error, handle_validation_error, Language};
