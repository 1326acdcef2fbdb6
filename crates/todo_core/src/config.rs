//! Environment-driven host configuration.
//!
//! # Responsibility
//! - Resolve the SQLite file path shared by hosts.
//! - Name the environment variables hosts read logging settings from.
//!
//! # Invariants
//! - Blank environment values are treated as unset.

use std::path::PathBuf;

/// Environment variable selecting the SQLite database file.
pub const DB_PATH_ENV: &str = "TODO_DB_PATH";
/// Environment variable selecting the log directory.
pub const LOG_DIR_ENV: &str = "TODO_LOG_DIR";
/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "TODO_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "todo_page.sqlite3";

/// Resolves the database path: `TODO_DB_PATH`, else a file in the temp dir.
pub fn resolve_db_path() -> PathBuf {
    env_value(DB_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(default_db_path)
}

/// Database path used when nothing is configured.
pub fn default_db_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
