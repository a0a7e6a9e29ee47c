//! Word-file loading.
//!
//! The out-of-band path that populates the words table from a JSON file.
//! The lookup core treats the dictionary as read-only; this module is the
//! only writer, and only when `km load` is invoked explicitly.
//!
//! Word-file format: an array of objects with camelCase keys,
//! `[{"word": ..., "meaning": ..., "synonyms"?: ..., "conjugation"?: ...}]`.

use std::path::Path;

use serde::Deserialize;

use crate::store::StoreClient;

/// One entry of a JSON word file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordRecord {
    word: String,
    meaning: String,
    #[serde(default)]
    synonyms: Option<String>,
    #[serde(default)]
    conjugation: Option<String>,
}

/// Errors from loading a word file.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read word file: {0}")]
    Read(String),
    #[error("failed to parse word file: {0}")]
    Parse(String),
    #[error("failed to store words: {0}")]
    Store(String),
}

/// Load all entries from the JSON word file at `path` into the store.
///
/// Returns the number of inserted entries. Entries are inserted as-is;
/// duplicate words are allowed by the schema and resolved at lookup time
/// by storage order.
pub async fn load_words(client: &StoreClient, path: &Path) -> Result<usize, LoaderError> {
    crate::debug!("Loading word file {:?}", path);

    let content =
        std::fs::read_to_string(path).map_err(|e| LoaderError::Read(e.to_string()))?;
    let records: Vec<WordRecord> =
        serde_json::from_str(&content).map_err(|e| LoaderError::Parse(e.to_string()))?;

    for record in &records {
        client
            .insert_word(
                &record.word,
                &record.meaning,
                record.synonyms.clone(),
                record.conjugation.clone(),
            )
            .await
            .map_err(|e| LoaderError::Store(e.to_string()))?;
    }

    crate::info!("Loaded {} dictionary entries from {:?}", records.len(), path);
    Ok(records.len())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
