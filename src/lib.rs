pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;

pub use database::CardStore;
pub use error::StorageError;
pub use models::{AccessibilityGateway, Card, CardEditor, DeckSession, Outcome, SwipeClassifier};
