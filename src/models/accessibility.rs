//! Accessibility action path.
//!
//! Assistive technology can't perform a drag, so the gateway exposes "mark
//! correct" and "mark incorrect" as plain actions that go straight to
//! `DeckSession::resolve_top`. It also tells the renderer how to present the
//! stack to assistive tech; it never draws anything itself.

use super::{Card, DeckSession, Outcome, Resolution};

/// User-level display settings that change how the review screen behaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessibilityPrefs {
    /// Colour alone must not signal correct/incorrect.
    pub differentiate_without_color: bool,
    /// Skip movement animations such as the drag offset.
    pub reduce_motion: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AccessibilityGateway {
    assistive_active: bool,
    prefs: AccessibilityPrefs,
}

impl AccessibilityGateway {
    pub fn new(assistive_active: bool) -> Self {
        Self {
            assistive_active,
            prefs: AccessibilityPrefs::default(),
        }
    }

    pub fn with_prefs(mut self, prefs: AccessibilityPrefs) -> Self {
        self.prefs = prefs;
        self
    }

    pub fn set_assistive_active(&mut self, active: bool) {
        self.assistive_active = active;
    }

    pub fn prefs(&self) -> AccessibilityPrefs {
        self.prefs
    }

    pub fn mark_correct(&self, session: &mut DeckSession) -> Option<Resolution> {
        session.resolve_top(Outcome::Correct)
    }

    pub fn mark_incorrect(&self, session: &mut DeckSession) -> Option<Resolution> {
        session.resolve_top(Outcome::Incorrect)
    }

    /// Cards below the top should be hidden from assistive traversal.
    pub fn top_only_focus(&self) -> bool {
        self.assistive_active
    }

    /// Explicit correct/incorrect controls replace colour-coded swiping.
    pub fn shows_action_buttons(&self) -> bool {
        self.assistive_active || self.prefs.differentiate_without_color
    }

    pub fn animate_drag(&self) -> bool {
        !self.prefs.reduce_motion
    }

    /// The single readable element for a card: the question, followed by the
    /// answer once revealed.
    pub fn card_label(card: &Card, revealed: bool) -> String {
        if revealed {
            let ends_sentence = card
                .question
                .ends_with(|c: char| matches!(c, '?' | '!' | '.' | ':'));
            let separator = if ends_sentence { " " } else { ". " };
            format!("{}{}{}", card.question, separator, card.answer)
        } else {
            card.question.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session_clock::ClockState;

    fn sample_session() -> DeckSession {
        DeckSession::new(vec![Card::new("2 + 2", "4"), Card::new("3 * 3", "9")])
    }

    #[test]
    fn test_actions_resolve_top_card() {
        let gateway = AccessibilityGateway::new(true);
        let mut session = sample_session();

        let resolution = gateway.mark_incorrect(&mut session).unwrap();
        assert_eq!(resolution.card.question, "3 * 3");
        assert_eq!(resolution.outcome, Outcome::Incorrect);

        let resolution = gateway.mark_correct(&mut session).unwrap();
        assert_eq!(resolution.card.question, "2 + 2");
        assert!(session.is_complete());
        assert!(gateway.mark_correct(&mut session).is_none());
    }

    #[test]
    fn test_actions_respect_expired_clock() {
        let gateway = AccessibilityGateway::new(true);
        let mut session = sample_session();
        while session.tick() != ClockState::Expired {}

        assert!(gateway.mark_correct(&mut session).is_none());
        assert_eq!(session.cards().len(), 2);
    }

    #[test]
    fn test_top_only_focus_follows_assistive_tech() {
        let mut gateway = AccessibilityGateway::default();
        assert!(!gateway.top_only_focus());

        gateway.set_assistive_active(true);
        assert!(gateway.top_only_focus());
        assert!(gateway.shows_action_buttons());
    }

    #[test]
    fn test_prefs_drive_presentation() {
        let gateway = AccessibilityGateway::new(false).with_prefs(AccessibilityPrefs {
            differentiate_without_color: true,
            reduce_motion: true,
        });

        assert!(gateway.shows_action_buttons());
        assert!(!gateway.animate_drag());
        assert!(!gateway.top_only_focus());
    }

    #[test]
    fn test_card_label_collapses_when_revealed() {
        let card = Card::new("Capital of Poland?", "Warsaw");

        assert_eq!(AccessibilityGateway::card_label(&card, false), "Capital of Poland?");
        assert_eq!(
            AccessibilityGateway::card_label(&card, true),
            "Capital of Poland? Warsaw"
        );

        let plain = Card::new("Capital of France", "Paris");
        assert_eq!(
            AccessibilityGateway::card_label(&plain, true),
            "Capital of France. Paris"
        );
    }
}
