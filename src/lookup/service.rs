// Lookup service over the word store.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};

use crate::store::{MissingWord, StoreClient, WordEntry};
use crate::tracker::{MissTracker, MissingWordTracker};

/// Cap on simultaneous in-flight store lookups during a multi-word search.
pub const MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Errors from lookup operations.
///
/// NotFound is the routine miss outcome and is kept distinct from Store so
/// callers can tell "no such word" apart from a failing database.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    /// Word absent from the dictionary; carries the original search term
    #[error("word '{0}' not found")]
    NotFound(String),
    /// Query or connection failure
    #[error("store error: {0}")]
    Store(String),
}

/// Word lookup over a shared store handle.
pub struct LookupService {
    client: Arc<StoreClient>,
    tracker: Arc<dyn MissTracker>,
}

impl LookupService {
    /// Create a service with the store-backed miss tracker.
    pub fn new(client: Arc<StoreClient>) -> Self {
        let tracker: Arc<dyn MissTracker> = Arc::new(MissingWordTracker::new(client.clone()));
        Self { client, tracker }
    }

    /// Create a service with a custom tracker implementation.
    pub fn with_tracker(client: Arc<StoreClient>, tracker: Arc<dyn MissTracker>) -> Self {
        Self { client, tracker }
    }

    /// Case-insensitive exact-match search.
    ///
    /// On a miss the tracker records the word as a best-effort side effect;
    /// a tracking failure is logged and never turns the NotFound result into
    /// a different error class.
    pub async fn search(&self, word: &str) -> Result<WordEntry, LookupError> {
        let found = self
            .client
            .find_word(word)
            .await
            .map_err(|e| LookupError::Store(e.to_string()))?;

        match found {
            Some(entry) => Ok(entry),
            None => {
                if let Err(e) = self.tracker.record_miss(word).await {
                    crate::warn!("Failed to track missing word '{}': {}", word, e);
                }
                Err(LookupError::NotFound(word.to_string()))
            }
        }
    }

    /// Look up several words concurrently.
    ///
    /// At most MAX_CONCURRENT_LOOKUPS sub-lookups run at a time; all words
    /// are attempted and the call returns only once every lookup finished.
    /// The result is keyed by the original input strings; any failure
    /// (not-found or store error) collapses to None. No ordering is
    /// guaranteed across sub-lookups.
    pub async fn search_multiple(&self, words: &[String]) -> HashMap<String, Option<WordEntry>> {
        stream::iter(words.iter().cloned())
            .map(|word| async move {
                let entry = self.search(&word).await.ok();
                (word, entry)
            })
            .buffer_unordered(MAX_CONCURRENT_LOOKUPS)
            .collect()
            .await
    }

    /// Case-insensitive substring search, capped at `limit` rows.
    /// Misses are not tracked here.
    pub async fn fuzzy_search(&self, term: &str, limit: u32) -> Result<Vec<WordEntry>, LookupError> {
        self.client
            .find_words_containing(term, limit)
            .await
            .map_err(|e| LookupError::Store(e.to_string()))
    }

    /// The most frequently missed words, sorted by search count descending
    /// and capped at `limit`.
    pub async fn missing_words(&self, limit: u32) -> Result<Vec<MissingWord>, LookupError> {
        self.client
            .top_missing_words(limit)
            .await
            .map_err(|e| LookupError::Store(e.to_string()))
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
