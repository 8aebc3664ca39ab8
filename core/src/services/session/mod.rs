//! Session registry module
//!
//! Tracks the currently valid refresh token per user in an external
//! TTL-capable key-value store. This is the single source of truth for
//! "is this refresh token still usable". It is never process-local memory:
//! concurrent server instances must observe the same session state.

mod registry;
mod store;

pub use registry::SessionRegistry;
pub use store::{MockSessionStore, SessionStoreTrait};
