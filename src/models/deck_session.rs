//! Review session state machine.
//!
//! The deck is a stack: the last card is on top and is the only one that can
//! be resolved. Every input path (drag gesture, accessibility action, keyboard)
//! ends up in `resolve_top`, so the "only the top card is interactive" rule
//! lives here and nowhere else.

use super::session_clock::{ClockState, DEFAULT_SESSION_SECONDS, SessionClock};
use super::{Card, Outcome};
use log::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Complete,
}

/// A card taken off the deck together with how it was answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub card: Card,
    pub outcome: Outcome,
}

/// What the renderer needs to draw one card of the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView<'a> {
    pub card: &'a Card,
    pub stack_index: usize,
    pub is_topmost: bool,
    pub is_revealed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub remaining_seconds: u32,
    pub cards_left: usize,
    pub is_complete: bool,
    pub correct: usize,
    pub incorrect: usize,
}

#[derive(Clone, Debug)]
pub struct DeckSession {
    cards: Vec<Card>,
    clock: SessionClock,
    revealed: bool,
    session_seconds: u32,
    correct: usize,
    incorrect: usize,
}

impl Default for DeckSession {
    fn default() -> Self {
        Self::with_duration(DEFAULT_SESSION_SECONDS)
    }
}

impl DeckSession {
    /// Starts a session over `cards`, top of the stack last.
    pub fn new(cards: Vec<Card>) -> Self {
        let mut session = Self::default();
        session.reset(cards);
        session
    }

    /// An empty (complete) session whose resets run for `seconds`.
    /// Zero would expire every session on reset, so it falls back to the default.
    pub fn with_duration(seconds: u32) -> Self {
        let seconds = if seconds == 0 {
            warn!("Session length of 0 seconds, using {}", DEFAULT_SESSION_SECONDS);
            DEFAULT_SESSION_SECONDS
        } else {
            seconds
        };
        let mut clock = SessionClock::new(seconds);
        clock.pause();

        Self {
            cards: Vec::new(),
            clock,
            revealed: false,
            session_seconds: seconds,
            correct: 0,
            incorrect: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn state(&self) -> SessionState {
        if self.cards.is_empty() {
            SessionState::Complete
        } else {
            SessionState::Active
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Complete
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.clock.remaining_seconds()
    }

    pub fn timer_active(&self) -> bool {
        self.clock.is_running()
    }

    /// Whether `resolve_top` would currently take effect.
    pub fn can_resolve(&self) -> bool {
        !self.cards.is_empty() && !self.clock.is_expired()
    }

    /// Removes the top card. Ignored when the deck is empty, the clock has
    /// expired or the outcome is `Cancelled`.
    pub fn resolve_top(&mut self, outcome: Outcome) -> Option<Resolution> {
        if outcome == Outcome::Cancelled || !self.can_resolve() {
            return None;
        }

        let card = self.cards.pop()?;
        self.revealed = false;

        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Incorrect => self.incorrect += 1,
            Outcome::Cancelled => {}
        }
        debug!("Resolved '{}' as {:?}, {} left", card.question, outcome, self.cards.len());

        if self.cards.is_empty() {
            // No clock runs with nothing left to review
            self.clock.pause();
            info!(
                "Session complete: {} correct, {} incorrect",
                self.correct, self.incorrect
            );
        }

        Some(Resolution { card, outcome })
    }

    pub fn toggle_reveal(&mut self) {
        if self.state() == SessionState::Active {
            self.revealed = !self.revealed;
        }
    }

    /// Starts a new logical session from `new_cards` with a full clock.
    pub fn reset(&mut self, new_cards: Vec<Card>) {
        self.cards = new_cards;
        self.revealed = false;
        self.correct = 0;
        self.incorrect = 0;
        self.clock.reset(self.session_seconds);

        if self.cards.is_empty() {
            self.clock.pause();
        }
        info!(
            "Session reset with {} cards, {} seconds",
            self.cards.len(),
            self.clock.remaining_seconds()
        );
    }

    pub fn tick(&mut self) -> ClockState {
        self.clock.tick()
    }

    pub fn on_background(&mut self) {
        self.clock.pause();
        info!("Moved to background, clock paused");
    }

    pub fn on_foreground(&mut self) {
        self.clock.resume(!self.cards.is_empty());
        info!("Back in foreground, clock {:?}", self.clock.state());
    }

    /// Cards in stack order; the last entry is the topmost.
    pub fn card_views(&self) -> Vec<CardView<'_>> {
        let top = self.cards.len().checked_sub(1);

        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let is_topmost = Some(index) == top;
                CardView {
                    card,
                    stack_index: index,
                    is_topmost,
                    is_revealed: is_topmost && self.revealed,
                }
            })
            .collect()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            remaining_seconds: self.clock.remaining_seconds(),
            cards_left: self.cards.len(),
            is_complete: self.is_complete(),
            correct: self.correct,
            incorrect: self.incorrect,
        }
    }
}
