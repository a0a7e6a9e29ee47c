// Database path resolution.
//
// The path is resolved exactly once at startup and fixed for the process
// lifetime. Resolution order:
// 1. KAMUSI_DB_PATH environment variable
// 2. data/kamusi.db in the current directory, if it exists
// 3. data/kamusi.db next to the running executable, if it exists
// 4. ~/.kamusi/kamusi.db (the directory is created if needed)

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::client::StoreError;

/// Environment variable overriding the database file path.
pub const DB_PATH_ENV: &str = "KAMUSI_DB_PATH";

const DB_FILE_NAME: &str = "kamusi.db";
const DATA_DIR_NAME: &str = "data";
const HOME_DIR_NAME: &str = ".kamusi";

/// Resolve the database file path using the fallback chain above.
pub fn resolve_db_path() -> Result<PathBuf, StoreError> {
    if let Ok(path) = env::var(DB_PATH_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let local = Path::new(DATA_DIR_NAME).join(DB_FILE_NAME);
    if local.exists() {
        return Ok(local);
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(DATA_DIR_NAME).join(DB_FILE_NAME);
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let home = dirs::home_dir()
        .ok_or_else(|| StoreError::Path("could not determine home directory".to_string()))?;
    let kamusi_dir = home.join(HOME_DIR_NAME);
    fs::create_dir_all(&kamusi_dir).map_err(|e| {
        StoreError::Path(format!("could not create {}: {}", kamusi_dir.display(), e))
    })?;

    Ok(kamusi_dir.join(DB_FILE_NAME))
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
