//! Authoring surface for the card list.
//! Every mutation is written through to the store straight away.

use super::Card;
use crate::database::CardStore;
use log::debug;

pub struct CardEditor<S: CardStore> {
    store: S,
    cards: Vec<Card>,
}

impl<S: CardStore> CardEditor<S> {
    /// Opens the editor with whatever the store currently holds.
    pub fn new(store: S) -> Self {
        let cards = store.load();
        Self { store, cards }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Adds a card at the front of the list.
    /// Returns false (and changes nothing) when either side is blank.
    pub fn add_card(&mut self, question: &str, answer: &str) -> bool {
        let Some(card) = Card::from_input(question, answer) else {
            return false;
        };

        debug!("Adding card '{}'", card.question);
        self.cards.insert(0, card);
        self.store.save(&self.cards);
        true
    }

    /// Removes the cards at `indices`. Out-of-range positions are ignored.
    pub fn remove_cards(&mut self, indices: &[usize]) {
        let mut indices: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.cards.len())
            .collect();
        indices.sort_unstable();
        indices.dedup();

        // Remove from the back so earlier positions stay valid
        for &index in indices.iter().rev() {
            self.cards.remove(index);
        }

        self.store.save(&self.cards);
    }

    pub fn replace_all(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.store.save(&self.cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryCardStore;

    #[test]
    fn test_add_card_inserts_at_front_and_saves() {
        let mut editor = CardEditor::new(MemoryCardStore::default());

        assert!(editor.add_card("first", "1"));
        assert!(editor.add_card(" second ", " 2 "));

        assert_eq!(editor.cards()[0], Card::new("second", "2"));
        assert_eq!(editor.cards()[1], Card::new("first", "1"));
        assert_eq!(editor.store().load(), editor.cards());
    }

    #[test]
    fn test_add_blank_card_is_rejected() {
        let mut editor = CardEditor::new(MemoryCardStore::default());

        assert!(!editor.add_card("  ", "answer"));
        assert!(editor.cards().is_empty());
        assert_eq!(editor.store().save_count(), 0);
    }

    #[test]
    fn test_remove_cards() {
        let store = MemoryCardStore::with_cards(vec![
            Card::new("a", "1"),
            Card::new("b", "2"),
            Card::new("c", "3"),
            Card::new("d", "4"),
        ]);
        let mut editor = CardEditor::new(store);

        editor.remove_cards(&[3, 1, 1, 42]);

        assert_eq!(editor.cards(), &[Card::new("a", "1"), Card::new("c", "3")]);
        assert_eq!(editor.store().load(), editor.cards());
    }

    #[test]
    fn test_failed_save_keeps_editing_alive() {
        let mut editor = CardEditor::new(MemoryCardStore::failing());

        assert!(editor.add_card("q", "a"));
        assert_eq!(editor.cards().len(), 1);
        assert!(editor.store().load().is_empty());
    }

    #[test]
    fn test_replace_all() {
        let mut editor = CardEditor::new(MemoryCardStore::default());
        editor.replace_all(vec![Card::example()]);

        assert_eq!(editor.store().load(), vec![Card::example()]);
    }
}
