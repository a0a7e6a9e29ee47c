use std::env;
use std::path::Path;

use serial_test::serial;
use tempfile::TempDir;

use crate::store::{resolve_db_path, DB_PATH_ENV};

// These tests mutate process-global state (env vars, current directory),
// so they are serialized.

#[test]
#[serial]
fn test_env_override_wins() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let override_path = temp_dir.path().join("override.db");

    env::set_var(DB_PATH_ENV, &override_path);
    let resolved = resolve_db_path();
    env::remove_var(DB_PATH_ENV);

    assert_eq!(resolved.expect("Failed to resolve path"), override_path);
}

#[test]
#[serial]
fn test_empty_env_override_is_ignored() {
    let temp_home = TempDir::new().expect("Failed to create temp dir");
    let temp_cwd = TempDir::new().expect("Failed to create temp dir");
    let original_cwd = env::current_dir().expect("Failed to get cwd");
    let original_home = env::var("HOME").ok();

    env::set_var(DB_PATH_ENV, "");
    env::set_var("HOME", temp_home.path());
    env::set_current_dir(temp_cwd.path()).expect("Failed to change cwd");

    let resolved = resolve_db_path();

    env::set_current_dir(&original_cwd).expect("Failed to restore cwd");
    env::remove_var(DB_PATH_ENV);
    restore_home(original_home);

    assert_eq!(
        resolved.expect("Failed to resolve path"),
        temp_home.path().join(".kamusi").join("kamusi.db")
    );
}

#[test]
#[serial]
fn test_local_data_dir_preferred() {
    let temp_cwd = TempDir::new().expect("Failed to create temp dir");
    let original_cwd = env::current_dir().expect("Failed to get cwd");

    env::remove_var(DB_PATH_ENV);
    std::fs::create_dir_all(temp_cwd.path().join("data")).expect("Failed to create data dir");
    std::fs::write(temp_cwd.path().join("data").join("kamusi.db"), b"")
        .expect("Failed to create db file");
    env::set_current_dir(temp_cwd.path()).expect("Failed to change cwd");

    let resolved = resolve_db_path();

    env::set_current_dir(&original_cwd).expect("Failed to restore cwd");

    assert_eq!(
        resolved.expect("Failed to resolve path"),
        Path::new("data").join("kamusi.db")
    );
}

#[test]
#[serial]
fn test_home_fallback_creates_directory() {
    let temp_home = TempDir::new().expect("Failed to create temp dir");
    let temp_cwd = TempDir::new().expect("Failed to create temp dir");
    let original_cwd = env::current_dir().expect("Failed to get cwd");
    let original_home = env::var("HOME").ok();

    env::remove_var(DB_PATH_ENV);
    env::set_var("HOME", temp_home.path());
    env::set_current_dir(temp_cwd.path()).expect("Failed to change cwd");

    let resolved = resolve_db_path();

    env::set_current_dir(&original_cwd).expect("Failed to restore cwd");
    restore_home(original_home);

    assert_eq!(
        resolved.expect("Failed to resolve path"),
        temp_home.path().join(".kamusi").join("kamusi.db")
    );
    assert!(
        temp_home.path().join(".kamusi").is_dir(),
        "Home fallback must create the directory"
    );
}

fn restore_home(original: Option<String>) {
    match original {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    }
}
