//! Word lookup service.
//!
//! Exposes exact search, fuzzy (substring) search, bounded concurrent
//! multi-word search, and missing-word reporting over the store.

mod service;

pub use service::{LookupError, LookupService, MAX_CONCURRENT_LOOKUPS};
