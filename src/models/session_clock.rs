//! Countdown clock bounding a review session.
//!
//! Ticks arrive from the host once per second. Only a running clock counts
//! down; hitting zero expires it. Backgrounding pauses unconditionally, while
//! resuming needs cards left to review.

use log::info;

/// Length of a fresh session, in seconds.
pub const DEFAULT_SESSION_SECONDS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    Running,
    Paused,
    Expired,
}

#[derive(Clone, Debug)]
pub struct SessionClock {
    state: ClockState,
    remaining_seconds: u32,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_SECONDS)
    }
}

impl SessionClock {
    /// A running clock with `seconds` on it (expired straight away for 0).
    pub fn new(seconds: u32) -> Self {
        let mut clock = Self {
            state: ClockState::Paused,
            remaining_seconds: 0,
        };
        clock.reset(seconds);
        clock
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn is_expired(&self) -> bool {
        self.state == ClockState::Expired
    }

    pub fn tick(&mut self) -> ClockState {
        if self.state == ClockState::Running {
            self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
            if self.remaining_seconds == 0 {
                self.state = ClockState::Expired;
                info!("Session clock expired");
            }
        }
        self.state
    }

    pub fn pause(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Paused;
        }
    }

    /// Paused -> Running, but only with cards left. Expired stays expired.
    pub fn resume(&mut self, has_cards: bool) {
        if self.state == ClockState::Paused && has_cards {
            self.state = ClockState::Running;
        }
    }

    pub fn reset(&mut self, seconds: u32) {
        self.remaining_seconds = seconds;
        self.state = if seconds == 0 {
            ClockState::Expired
        } else {
            ClockState::Running
        };
    }
}
