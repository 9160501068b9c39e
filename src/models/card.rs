//! Card is a pair <question, answer>. Only text is used on both sides
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Sample card shown in previews and seeded into an empty store.
    pub fn example() -> Self {
        Self::new("Who played the 13th Doctor in Doctor Who?", "Jodie Whittaker")
    }

    /// Builds a card from raw form input.
    /// Both sides are trimmed; returns None if either one ends up empty.
    pub fn from_input(question: &str, answer: &str) -> Option<Self> {
        let question = question.trim();
        let answer = answer.trim();

        if question.is_empty() || answer.is_empty() {
            return None;
        }

        Some(Self::new(question, answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("hello", "cześć");

        assert_eq!(card.question, "hello");
        assert_eq!(card.answer, "cześć");
    }

    #[test]
    fn test_card_equality_is_by_value() {
        let card1 = Card::new("hello", "cześć");
        let card2 = card1.clone();

        assert_eq!(card1, card2);
        assert_ne!(card1, Card::new("hello", "witaj"));
    }

    #[test]
    fn test_from_input_trims() {
        let card = Card::from_input("  capital of France ", "\tParis ").unwrap();

        assert_eq!(card.question, "capital of France");
        assert_eq!(card.answer, "Paris");
    }

    #[test]
    fn test_from_input_rejects_blank_sides() {
        assert!(Card::from_input("   ", "answer").is_none());
        assert!(Card::from_input("question", "").is_none());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&Card::new("q", "a")).unwrap();
        assert_eq!(json, r#"{"question":"q","answer":"a"}"#);
    }
}
