//! Turns a horizontal drag into a discrete review outcome.
//!
//! The classifier only knows about the drag translation along x:
//! - while dragging, `on_changed` records the offset (used for tinting the card)
//! - on release, `on_ended` compares |dx| against the threshold
//! - right of the threshold is Correct, left is Incorrect, anything else Cancelled
//!
//! The offset is cleared on every release so no state leaks between gestures.

/// Distance (in view units) a card must travel before a release counts.
pub const SWIPE_THRESHOLD: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct SwipeClassifier {
    threshold: f32,
    offset: f32,
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl SwipeClassifier {
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.max(0.0)
        } else {
            SWIPE_THRESHOLD
        };

        Self {
            threshold,
            offset: 0.0,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Current in-progress drag offset. Zero when no gesture is active.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn on_changed(&mut self, dx: f32) {
        self.offset = if dx.is_finite() { dx } else { 0.0 };
    }

    /// Which way the card is currently leaning, if at all.
    pub fn leaning(&self) -> Option<Outcome> {
        if self.offset > 0.0 {
            Some(Outcome::Correct)
        } else if self.offset < 0.0 {
            Some(Outcome::Incorrect)
        } else {
            None
        }
    }

    pub fn on_ended(&mut self, dx: f32) -> Outcome {
        self.offset = 0.0;

        // NaN fails the comparison and falls through to Cancelled
        if dx.abs() > self.threshold {
            if dx > 0.0 {
                Outcome::Correct
            } else {
                Outcome::Incorrect
            }
        } else {
            Outcome::Cancelled
        }
    }

    /// Drops an interrupted gesture without producing an outcome.
    pub fn cancel(&mut self) {
        self.offset = 0.0;
    }
}
