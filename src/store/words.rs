// Row operations on the words table using Turso/libsql.
//
// The lookup path is read-only here; insert_word exists for the out-of-band
// loading path only.

use chrono::{DateTime, Utc};
use libsql::params;
use serde::Serialize;

use super::client::{StoreClient, StoreError};

/// A single dictionary entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub id: i64,
    /// Case-insensitive lookup key
    pub word: String,
    pub meaning: String,
    pub synonyms: Option<String>,
    pub conjugation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreClient {
    /// Case-insensitive exact-match lookup.
    ///
    /// Returns at most one entry; if several rows share the word, the first
    /// in storage order wins.
    pub async fn find_word(&self, word: &str) -> Result<Option<WordEntry>, StoreError> {
        let mut rows = self
            .query(
                r#"SELECT id, word, meaning, synonyms, conjugation, created_at, updated_at
                   FROM words WHERE word = ?1 COLLATE NOCASE LIMIT 1"#,
                params![word],
            )
            .await?;

        match rows.next().await.map_err(|e| StoreError::Query(e.to_string()))? {
            Some(row) => Ok(Some(entry_from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Case-insensitive substring match (`%term%`), capped at `limit` rows.
    /// Row order is storage-defined.
    pub async fn find_words_containing(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<WordEntry>, StoreError> {
        let pattern = format!("%{}%", term);
        let mut rows = self
            .query(
                r#"SELECT id, word, meaning, synonyms, conjugation, created_at, updated_at
                   FROM words WHERE word LIKE ?1 COLLATE NOCASE LIMIT ?2"#,
                params![pattern, limit as i64],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await.map_err(|e| StoreError::Query(e.to_string()))? {
            entries.push(entry_from_row(&row)?);
        }
        Ok(entries)
    }

    /// Insert a dictionary entry with both timestamps set to now.
    ///
    /// This is the loader's write path; the lookup service never mutates
    /// the words table.
    pub async fn insert_word(
        &self,
        word: &str,
        meaning: &str,
        synonyms: Option<String>,
        conjugation: Option<String>,
    ) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();
        self.execute(
            r#"INSERT INTO words (word, meaning, synonyms, conjugation, created_at, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?5)"#,
            params![word, meaning, synonyms, conjugation, now],
        )
        .await?;
        Ok(())
    }
}

fn entry_from_row(row: &libsql::Row) -> Result<WordEntry, StoreError> {
    let id: i64 = row.get(0).map_err(|e| StoreError::Query(e.to_string()))?;
    let word: String = row.get(1).map_err(|e| StoreError::Query(e.to_string()))?;
    let meaning: String = row.get(2).map_err(|e| StoreError::Query(e.to_string()))?;
    let synonyms: Option<String> = row.get(3).map_err(|e| StoreError::Query(e.to_string()))?;
    let conjugation: Option<String> = row.get(4).map_err(|e| StoreError::Query(e.to_string()))?;
    let created_at: String = row.get(5).map_err(|e| StoreError::Query(e.to_string()))?;
    let updated_at: String = row.get(6).map_err(|e| StoreError::Query(e.to_string()))?;

    Ok(WordEntry {
        id,
        word,
        meaning,
        synonyms,
        conjugation,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

/// Parse an RFC 3339 timestamp column.
pub(super) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StoreError::Query(format!("bad timestamp '{}': {}", value, e)))
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
