//! JSON import/export of the card list.
//! Files hold the same array of {question, answer} objects the database slot does.

use crate::error::StorageError;
use crate::models::Card;
use log::{info, warn};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports the cards to a pretty-printed JSON file at the specified path.
pub fn export_cards_to_path(cards: &[Card], path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(cards)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;

    info!("Exported {} cards to {}", cards.len(), path.display());
    Ok(())
}

/// Imports cards from a JSON file.
/// Cards that are blank after trimming are skipped.
pub fn import_cards(path: impl AsRef<Path>) -> Result<Vec<Card>, StorageError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let raw: Vec<Card> = serde_json::from_str(&contents)?;
    let total = raw.len();
    let cards: Vec<Card> = raw
        .iter()
        .filter_map(|card| Card::from_input(&card.question, &card.answer))
        .collect();

    if cards.len() < total {
        warn!("Skipped {} blank cards in {}", total - cards.len(), path.display());
    }
    info!("Imported {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_test_cards() -> Vec<Card> {
        vec![
            Card::new("hello", "cześć"),
            Card::new("goodbye", "do widzenia"),
        ]
    }

    #[test]
    fn test_export_cards_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("export.json");

        let result = export_cards_to_path(&create_test_cards(), &test_file);
        assert!(result.is_ok());
        assert!(fs::metadata(&test_file).is_ok(), "File should exist");
    }

    #[test]
    fn test_import_cards() {
        let json_content = r#"[
  { "question": "test question", "answer": "test answer" },
  { "question": "   ", "answer": "dropped" }
]"#;
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("import.json");
        fs::write(&test_file, json_content).unwrap();

        let cards = import_cards(&test_file).unwrap();
        assert_eq!(cards, vec![Card::new("test question", "test answer")]);
    }

    #[test]
    fn test_export_and_import_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("roundtrip.json");

        export_cards_to_path(&create_test_cards(), &test_file).unwrap();
        assert_eq!(import_cards(&test_file).unwrap(), create_test_cards());
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_cards("nonexistent_file_xyz123.json");
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("invalid.json");
        fs::write(&test_file, "{ this is not valid json }").unwrap();

        let result = import_cards(&test_file);
        assert!(matches!(result, Err(StorageError::Json(_))));
    }
}
