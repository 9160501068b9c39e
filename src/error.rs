//! Errors raised by the storage layer (SQLite slot, JSON files, config file).
//! Review-session operations never fail, so nothing in `models` returns these.

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("database connection lock poisoned")]
    LockPoisoned,
}
