// Row operations on the missing_words table.
//
// The miss counter is maintained by a single atomic upsert; concurrent
// misses on the same word serialize at the storage layer, so increments are
// never lost.

use chrono::{DateTime, Utc};
use libsql::params;

use super::client::{StoreClient, StoreError};
use super::words::parse_timestamp;

/// A word that was searched but not found.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingWord {
    pub word: String,
    pub search_count: i64,
    pub last_searched_at: DateTime<Utc>,
}

impl StoreClient {
    /// Record one miss for `word`: insert with a count of 1, or atomically
    /// bump the counter and last_searched_at. first_searched_at is set once
    /// and never touched again.
    pub async fn upsert_missing_word(&self, word: &str) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();
        self.execute(
            r#"INSERT INTO missing_words (word, search_count, first_searched_at, last_searched_at)
               VALUES (?1, 1, ?2, ?2)
               ON CONFLICT(word) DO UPDATE SET
                   search_count = search_count + 1,
                   last_searched_at = excluded.last_searched_at"#,
            params![word, now],
        )
        .await?;
        Ok(())
    }

    /// The most frequently missed words, sorted by search_count descending
    /// and capped at `limit`. Ties are in storage-defined order.
    pub async fn top_missing_words(&self, limit: u32) -> Result<Vec<MissingWord>, StoreError> {
        let mut rows = self
            .query(
                r#"SELECT word, search_count, last_searched_at
                   FROM missing_words
                   ORDER BY search_count DESC
                   LIMIT ?1"#,
                params![limit as i64],
            )
            .await?;

        let mut results = Vec::new();
        while let Some(row) = rows.next().await.map_err(|e| StoreError::Query(e.to_string()))? {
            let word: String = row.get(0).map_err(|e| StoreError::Query(e.to_string()))?;
            let search_count: i64 = row.get(1).map_err(|e| StoreError::Query(e.to_string()))?;
            let last_searched_at: String =
                row.get(2).map_err(|e| StoreError::Query(e.to_string()))?;

            results.push(MissingWord {
                word,
                search_count,
                last_searched_at: parse_timestamp(&last_searched_at)?,
            });
        }
        Ok(results)
    }
}

#[cfg(test)]
#[path = "missing_test.rs"]
mod tests;
