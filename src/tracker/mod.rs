//! Missing-word tracking.
//!
//! Whenever a lookup misses, the tracker records the miss as an atomic
//! insert-or-increment keyed by the case-insensitive word. The lookup
//! service depends on the `MissTracker` trait rather than the concrete
//! implementation, so tests can substitute a failing tracker and verify
//! that tracking failures never change the outcome of a search.

use std::sync::Arc;

use async_trait::async_trait;

use crate::store::StoreClient;

/// Errors from miss tracking. Never escalated past the lookup service;
/// at most logged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackerError {
    #[error("failed to record missing word: {0}")]
    Store(String),
}

/// Backend trait for recording lookup misses.
///
/// The primary implementation is `MissingWordTracker`.
#[async_trait]
pub trait MissTracker: Send + Sync {
    /// Record one miss for `word`.
    ///
    /// Safe under concurrent misses on the same word from multiple callers:
    /// the increment must be atomic at the storage layer, never a
    /// read-modify-write pair.
    async fn record_miss(&self, word: &str) -> Result<(), TrackerError>;
}

/// Store-backed tracker writing to the missing_words table.
#[derive(Clone)]
pub struct MissingWordTracker {
    client: Arc<StoreClient>,
}

impl MissingWordTracker {
    pub fn new(client: Arc<StoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MissTracker for MissingWordTracker {
    async fn record_miss(&self, word: &str) -> Result<(), TrackerError> {
        self.client
            .upsert_missing_word(word)
            .await
            .map_err(|e| TrackerError::Store(e.to_string()))
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
