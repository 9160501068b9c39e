//! SQLite persistence for the card list
//!
//! The store is a single key-value table. The whole card list is kept under
//! one key as a JSON array and is always read and written in one piece.

use super::CardStore;
use crate::error::StorageError;
use crate::models::Card;
use log::warn;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Slot holding the JSON-encoded card list
pub const CARDS_KEY: &str = "Cards";

fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;
    Ok(())
}

/// Opens (or creates) the database file and makes sure the table exists
pub fn init_database(path: impl AsRef<Path>) -> Result<Connection, StorageError> {
    let conn = Connection::open(path)?;
    create_tables(&conn)?;
    Ok(conn)
}

/// Same as `init_database` but nothing touches the disk
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory()?;
    create_tables(&conn)?;
    Ok(conn)
}

/// Reads a raw value, None if the key was never written
pub fn get_value(key: &str, conn: &Connection) -> Result<Option<String>, StorageError> {
    let value = conn
        .query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

/// Inserts or overwrites a raw value
pub fn set_value(key: &str, value: &str, conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Loads the saved card list. An empty list if nothing was saved yet.
pub fn load_cards(conn: &Connection) -> Result<Vec<Card>, StorageError> {
    match get_value(CARDS_KEY, conn)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Replaces the saved card list
pub fn save_cards(cards: &[Card], conn: &Connection) -> Result<(), StorageError> {
    let json = serde_json::to_string(cards)?;
    set_value(CARDS_KEY, &json, conn)
}

/// `CardStore` backed by a shared SQLite connection
#[derive(Clone)]
pub struct SqliteCardStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCardStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub fn try_load(&self) -> Result<Vec<Card>, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        load_cards(&conn)
    }

    pub fn try_save(&self, cards: &[Card]) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        save_cards(cards, &conn)
    }
}

impl CardStore for SqliteCardStore {
    fn load(&self) -> Vec<Card> {
        self.try_load().unwrap_or_else(|e| {
            warn!("Failed to load cards, starting with an empty deck: {}", e);
            Vec::new()
        })
    }

    fn save(&self, cards: &[Card]) {
        if let Err(e) = self.try_save(cards) {
            warn!("Failed to save {} cards: {}", cards.len(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cards() -> Vec<Card> {
        vec![Card::new("cześć", "hello"), Card::new("dziękuję", "thank you")]
    }

    #[test]
    fn test_load_from_fresh_database_is_empty() {
        let conn = open_in_memory().unwrap();
        assert!(load_cards(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_whole_list() {
        let conn = open_in_memory().unwrap();

        save_cards(&sample_cards(), &conn).unwrap();
        save_cards(&[Card::new("proszę", "please")], &conn).unwrap();

        assert_eq!(load_cards(&conn).unwrap(), vec![Card::new("proszę", "please")]);
    }

    #[test]
    fn test_cards_stored_as_json_array() {
        let conn = open_in_memory().unwrap();
        save_cards(&[Card::new("q", "a")], &conn).unwrap();

        let raw = get_value(CARDS_KEY, &conn).unwrap().unwrap();
        assert_eq!(raw, r#"[{"question":"q","answer":"a"}]"#);
    }

    #[test]
    fn test_store_swallows_corrupt_slot() {
        let conn = open_in_memory().unwrap();
        set_value(CARDS_KEY, "{ not json", &conn).unwrap();
        let store = SqliteCardStore::new(conn);

        assert!(store.try_load().is_err());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_store_save_then_load() {
        let store = SqliteCardStore::new(open_in_memory().unwrap());

        store.save(&sample_cards());
        assert_eq!(store.load(), sample_cards());
    }

    #[test]
    fn test_init_database_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.sqlite3");

        {
            let conn = init_database(&path).unwrap();
            save_cards(&sample_cards(), &conn).unwrap();
        }

        let conn = init_database(&path).unwrap();
        assert_eq!(load_cards(&conn).unwrap(), sample_cards());
    }
}
