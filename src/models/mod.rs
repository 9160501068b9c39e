pub mod accessibility;
pub mod card;
pub mod card_editor;
pub mod deck_session;
pub mod session_clock;
pub mod swipe;

pub use accessibility::{AccessibilityGateway, AccessibilityPrefs};
pub use card::Card;
pub use card_editor::CardEditor;
pub use deck_session::{CardView, DeckSession, Resolution, SessionState, SessionSummary};
pub use session_clock::{ClockState, SessionClock};
pub use swipe::{Outcome, SwipeClassifier};
