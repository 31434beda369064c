//! Non-blocking pairing monitor.
//!
//! Pairing is requested once, then the sink is polled no more often than the
//! configured interval. Each [`PairingMonitor::poll`] call returns at once so
//! the navigation loop never blocks while the sink comes up.

use embassy_time::{Duration, Instant};
use platform::AudioEngine;

use crate::state::PairingState;

/// Drives `request_pairing` / `pairing_connected` on an [`AudioEngine`].
#[derive(Debug, Clone)]
pub struct PairingMonitor {
    interval: Duration,
    state: PairingState,
    next_poll: Instant,
    polls: u32,
}

impl PairingMonitor {
    /// Monitor polling every `interval`.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: PairingState::Idle,
            next_poll: Instant::from_ticks(0),
            polls: 0,
        }
    }

    /// Issue the pairing request. The first check happens on the next
    /// [`PairingMonitor::poll`].
    pub fn start(&mut self, audio: &mut dyn AudioEngine, now: Instant) {
        audio.request_pairing();
        self.state = PairingState::Pairing;
        self.next_poll = now;
        self.polls = 0;
        tracing::info!("bluetooth pairing requested");
    }

    /// Check the sink if the interval has elapsed.
    ///
    /// Returns the state after the check. Calling this while idle or after
    /// the sink connected does not touch the engine.
    pub fn poll(&mut self, audio: &dyn AudioEngine, now: Instant) -> PairingState {
        if self.state != PairingState::Pairing || now < self.next_poll {
            return self.state;
        }
        self.polls = self.polls.saturating_add(1);
        if audio.pairing_connected() {
            self.state = PairingState::Connected;
            tracing::info!(polls = self.polls, "bluetooth sink connected");
        } else {
            self.next_poll = now.checked_add(self.interval).unwrap_or(Instant::MAX);
        }
        self.state
    }

    /// Forget any pairing in progress.
    pub fn reset(&mut self) {
        self.state = PairingState::Idle;
        self.polls = 0;
    }

    pub fn state(&self) -> PairingState {
        self.state
    }

    /// Earliest instant the next check may run.
    pub fn next_poll(&self) -> Instant {
        self.next_poll
    }

    /// Number of sink checks since [`PairingMonitor::start`].
    pub fn polls(&self) -> u32 {
        self.polls
    }
}
