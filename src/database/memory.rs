//! In-memory `CardStore` for tests and embedding without SQLite.

use super::CardStore;
use crate::models::Card;
use log::warn;
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub struct MemoryCardStore {
    cards: RefCell<Vec<Card>>,
    fail_saves: bool,
    saves: Cell<usize>,
}

impl MemoryCardStore {
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: RefCell::new(cards),
            ..Self::default()
        }
    }

    /// A store whose writes never land
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Number of save attempts, successful or not
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl CardStore for MemoryCardStore {
    fn load(&self) -> Vec<Card> {
        self.cards.borrow().clone()
    }

    fn save(&self, cards: &[Card]) {
        self.saves.set(self.saves.get() + 1);
        if self.fail_saves {
            warn!("Dropping save of {} cards", cards.len());
            return;
        }
        *self.cards.borrow_mut() = cards.to_vec();
    }
}
