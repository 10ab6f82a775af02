//! Repeat suppression for key events
//!
//! A held key must fire `on_key_press` once, not once per auto-repeat.
//! Terminals disagree about how repeats arrive: kitty-protocol terminals emit
//! `Repeat` kinds and `Release` events, plainer ones emit a stream of `Press`
//! events and no release at all. A hold timeout re-arms the key in the latter
//! case.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEventKind};

/// Without release events, a key is considered let go once this much time has
/// passed since it last produced any event.
const DEFAULT_HOLD_TIMEOUT_MS: u64 = 150;

/// Tracks the currently held key and decides which press events are the
/// initial press.
#[derive(Debug, Clone)]
pub struct RepeatFilter {
    held: Option<KeyCode>,
    last_seen: Instant,
    hold_timeout_ms: u64,
}

impl RepeatFilter {
    pub fn new() -> Self {
        Self {
            held: None,
            last_seen: Instant::now(),
            hold_timeout_ms: DEFAULT_HOLD_TIMEOUT_MS,
        }
    }

    pub fn with_hold_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.hold_timeout_ms = timeout_ms;
        self
    }

    /// Feed a key event; returns the code if this is an initial press that
    /// should be dispatched.
    pub fn filter(&mut self, code: KeyCode, kind: KeyEventKind) -> Option<KeyCode> {
        match kind {
            KeyEventKind::Press => {
                let now = Instant::now();
                let timed_out =
                    now.duration_since(self.last_seen).as_millis() as u64 > self.hold_timeout_ms;
                if self.held == Some(code) && !timed_out {
                    // Terminal that reports repeats as plain presses.
                    self.last_seen = now;
                    return None;
                }
                self.held = Some(code);
                self.last_seen = now;
                Some(code)
            }
            KeyEventKind::Repeat => {
                self.last_seen = Instant::now();
                None
            }
            KeyEventKind::Release => {
                if self.held == Some(code) {
                    self.held = None;
                }
                None
            }
        }
    }
}

impl Default for RepeatFilter {
    fn default() -> Self {
        Self::new()
    }
}
