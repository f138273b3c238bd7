//! Input thread and held-key tracking.
//!
//! Terminal input arrives as discrete events, but the arcade loop
//! needs "is this key down right now". `HeldKeys` bridges the two by
//! stamping each key with the frame it was last seen: on terminals
//! with key-release reporting the stamp is removed on release, and on
//! classic terminals the OS key-repeat refreshes it faster than the
//! hold window expires.

use std::collections::HashMap;
use std::sync::mpsc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// A key counts as held if its last press or repeat arrived within
/// this many frames. OS key-repeat runs at 15Hz or faster, so at 60
/// frames per second the stamp is always refreshed before it expires.
pub const HOLD_WINDOW: u64 = 8;

/// Spawns the thread that blocks on terminal reads.
///
/// The returned receiver yields every event; the thread exits when the
/// receiver is dropped or the terminal read fails.
pub fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel::<Event>();

    std::thread::Builder::new()
        .name("starfall-input".into())
        .spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        })
        .expect("Failed to spawn input thread");

    rx
}

/// Frame-stamped held-key state for the arcade loop.
#[derive(Default)]
pub struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    /// Record one key event against the current frame.
    pub fn record(&mut self, code: KeyCode, kind: KeyEventKind, frame: u64) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
            }
        }
    }

    /// True if `code` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&code)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// True if any of `codes` is currently held.
    pub fn any_held(&self, codes: &[KeyCode], frame: u64) -> bool {
        codes.iter().any(|code| self.is_held(*code, frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_held_within_window() {
        let mut held = HeldKeys::default();
        held.record(KeyCode::Char(' '), KeyEventKind::Press, 10);

        assert!(held.is_held(KeyCode::Char(' '), 10));
        assert!(held.is_held(KeyCode::Char(' '), 10 + HOLD_WINDOW));
        assert!(!held.is_held(KeyCode::Char(' '), 11 + HOLD_WINDOW));
    }

    #[test]
    fn test_repeat_refreshes_the_stamp() {
        let mut held = HeldKeys::default();
        held.record(KeyCode::Left, KeyEventKind::Press, 1);
        held.record(KeyCode::Left, KeyEventKind::Repeat, 20);

        assert!(held.is_held(KeyCode::Left, 20 + HOLD_WINDOW));
    }

    #[test]
    fn test_release_clears_immediately() {
        let mut held = HeldKeys::default();
        held.record(KeyCode::Right, KeyEventKind::Press, 5);
        held.record(KeyCode::Right, KeyEventKind::Release, 6);

        assert!(!held.is_held(KeyCode::Right, 6));
    }

    #[test]
    fn test_any_held_checks_aliases() {
        let mut held = HeldKeys::default();
        held.record(KeyCode::Char('a'), KeyEventKind::Press, 3);

        let lefts = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
        assert!(held.any_held(&lefts, 4));
        assert!(!held.any_held(&[KeyCode::Right, KeyCode::Char('d')], 4));
    }

    #[test]
    fn test_unseen_key_is_not_held() {
        let held = HeldKeys::default();
        assert!(!held.is_held(KeyCode::Char(' '), 100));
    }
}
