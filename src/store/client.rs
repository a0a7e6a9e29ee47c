// Embedded database client wrapping Turso/libsql.
//
// One StoreClient is constructed at startup and shared as Arc<StoreClient>
// for the process lifetime. The underlying connection is safe for concurrent
// use; the engine serializes writes internally, so callers need no locking
// of their own.

use std::path::{Path, PathBuf};

use libsql::params::IntoParams;

/// Errors from the store layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Database file could not be opened or connected to
    #[error("failed to open database: {0}")]
    ConnectionFailed(String),
    /// Database path could not be resolved
    #[error("failed to resolve database path: {0}")]
    Path(String),
    /// Schema creation or migration failed
    #[error("schema initialization failed: {0}")]
    Schema(String),
    /// Query execution or row decoding failed
    #[error("query failed: {0}")]
    Query(String),
}

/// Shared handle to the embedded dictionary database.
pub struct StoreClient {
    db_path: PathBuf,
    conn: libsql::Connection,
}

impl StoreClient {
    /// Open the database at the given file path, creating the containing
    /// directory if needed.
    ///
    /// # Arguments
    /// * `db_path` - Full path to the database file
    pub async fn open(db_path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::ConnectionFailed(format!(
                        "could not create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let db = libsql::Builder::new_local(&db_path)
            .build()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
        let conn = db
            .connect()
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        crate::debug!("Opened dictionary database at {:?}", db_path);
        Ok(Self { db_path, conn })
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a statement, returning the number of affected rows.
    pub async fn execute(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<u64, StoreError> {
        self.conn
            .execute(sql, params)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    /// Run a query, returning the result rows.
    pub async fn query(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<libsql::Rows, StoreError> {
        self.conn
            .query(sql, params)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
