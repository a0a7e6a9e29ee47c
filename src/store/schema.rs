// Database schema definitions and migration system
//
// Defines the SQLite schema for the words and missing_words tables and
// provides a migration ladder for future schema changes.

use super::client::{StoreClient, StoreError};

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// SQL statements to create all tables (each as a separate string)
const CREATE_TABLES: &[&str] = &[
    // Dictionary entries. word is NOCASE so lookups ignore casing; it is
    // indexed but not unique, Search picks one row with LIMIT 1.
    r#"CREATE TABLE IF NOT EXISTS words (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT NOT NULL COLLATE NOCASE,
        meaning TEXT NOT NULL,
        synonyms TEXT,
        conjugation TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )"#,
    // Index for faster word lookups
    r#"CREATE INDEX IF NOT EXISTS idx_words_word ON words(word)"#,
    // Words that were searched but not found. One row per distinct word
    // regardless of casing; the miss counter is bumped by an atomic upsert
    // keyed on the unique word column.
    r#"CREATE TABLE IF NOT EXISTS missing_words (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT NOT NULL COLLATE NOCASE UNIQUE,
        search_count INTEGER NOT NULL DEFAULT 1,
        first_searched_at TEXT NOT NULL,
        last_searched_at TEXT NOT NULL
    )"#,
    // Index for faster missing-word lookups
    r#"CREATE INDEX IF NOT EXISTS idx_missing_words_word ON missing_words(word)"#,
];

/// Initialize the database schema.
///
/// Creates all tables if they don't exist and runs any pending migrations.
/// Safe to call on every process start; existing data is never destroyed.
pub async fn initialize_schema(client: &StoreClient) -> Result<(), StoreError> {
    // First, ensure schema_version table exists (needed for version checking)
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await
        .map_err(|e| StoreError::Schema(e.to_string()))?;

    let current_version = get_schema_version(client).await?;

    if current_version == 0 {
        // Fresh database - create all tables
        crate::info!("Initializing dictionary schema (version {})", SCHEMA_VERSION);

        for statement in CREATE_TABLES {
            client
                .execute(statement, ())
                .await
                .map_err(|e| StoreError::Schema(e.to_string()))?;
        }

        set_schema_version(client, SCHEMA_VERSION).await?;
    } else if current_version < SCHEMA_VERSION {
        crate::info!(
            "Migrating dictionary schema from version {} to {}",
            current_version,
            SCHEMA_VERSION
        );
        run_migrations(client, current_version, SCHEMA_VERSION).await?;
    } else {
        crate::debug!("Dictionary schema is up to date (version {})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database.
/// Returns 0 for a fresh database.
async fn get_schema_version(client: &StoreClient) -> Result<i32, StoreError> {
    let mut rows = client
        .query(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            (),
        )
        .await
        .map_err(|e| StoreError::Schema(e.to_string()))?;

    match rows.next().await.map_err(|e| StoreError::Schema(e.to_string()))? {
        Some(row) => {
            let version: i32 = row.get(0).map_err(|e| StoreError::Schema(e.to_string()))?;
            Ok(version)
        }
        None => Ok(0),
    }
}

/// Set the schema version in the database.
async fn set_schema_version(client: &StoreClient, version: i32) -> Result<(), StoreError> {
    client
        .execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await
        .map_err(|e| StoreError::Schema(e.to_string()))?;
    Ok(())
}

/// Run migrations from one version to another.
async fn run_migrations(
    client: &StoreClient,
    from_version: i32,
    to_version: i32,
) -> Result<(), StoreError> {
    for version in (from_version + 1)..=to_version {
        match version {
            // 2 => migrate_v1_to_v2(client).await?,
            _ => {
                crate::debug!("No migration needed for version {}", version);
            }
        }
        set_schema_version(client, version).await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
