//! Card list persistence.
//!
//! The review session only ever sees the `CardStore` contract: `load` hands
//! back the saved list (empty on any failure) and `save` is best-effort.

pub mod db;
pub mod memory;

use crate::models::Card;

pub trait CardStore {
    fn load(&self) -> Vec<Card>;
    fn save(&self, cards: &[Card]);
}
