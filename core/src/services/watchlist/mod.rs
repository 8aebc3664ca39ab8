//! Watchlist service module
//!
//! Enforces the list-entry consistency model: one entry per (user, title)
//! pair, owner-only mutation, and episode progress bounded by the title's
//! known episode count.

mod service;

pub use service::{ProgressUpdate, WatchlistService};
