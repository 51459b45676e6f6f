//! Held-key tracking for terminal environments.
//!
//! The game polls "is left/right held" once per frame. Terminals that report key
//! releases give that directly. Terminals that do not are handled with a timeout:
//! a lone press counts as held for the next frame only, and a key is held across
//! frames while press/repeat events keep arriving within `key_release_timeout_ms`
//! of each other.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::direction_for_key;
use crate::types::{HeldKeys, HorizontalDirection};

// A single tap must not turn into a sustained hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, Copy, Default)]
struct KeyHold {
    last_seen: Option<Instant>,
    /// Seen again within the timeout of the previous event.
    repeating: bool,
    /// Press not yet reported to a frame.
    pending: bool,
}

impl KeyHold {
    fn press(&mut self, now: Instant, timeout: Duration) {
        self.repeating = self
            .last_seen
            .is_some_and(|seen| now.saturating_duration_since(seen) <= timeout);
        self.last_seen = Some(now);
        self.pending = true;
    }

    fn take_held(&mut self, now: Instant, timeout: Option<Duration>) -> bool {
        let Some(limit) = timeout else {
            let held = self.pending || self.last_seen.is_some();
            self.pending = false;
            return held;
        };
        let recent = self
            .last_seen
            .is_some_and(|seen| now.saturating_duration_since(seen) <= limit);
        let held = self.pending || (self.repeating && recent);
        self.pending = false;
        held
    }
}

/// Tracks which movement keys are currently held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left: KeyHold,
    right: KeyHold,
    /// Set once the terminal has delivered a release event.
    release_events: bool,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left: KeyHold::default(),
            right: KeyHold::default(),
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Whether the terminal has shown it reports key releases.
    pub fn has_release_events(&self) -> bool {
        self.release_events
    }

    fn slot(&mut self, code: KeyCode) -> Option<&mut KeyHold> {
        match direction_for_key(code)? {
            HorizontalDirection::Left => Some(&mut self.left),
            HorizontalDirection::Right => Some(&mut self.right),
            HorizontalDirection::None => None,
        }
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.key_release_timeout_ms as u64)
    }

    /// Record a press (or auto-repeat) of `code` at `now`.
    pub fn handle_key_press(&mut self, code: KeyCode, now: Instant) {
        let timeout = self.timeout();
        if let Some(slot) = self.slot(code) {
            slot.press(now, timeout);
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.release_events = true;
        if let Some(slot) = self.slot(code) {
            // A press released within the same frame still moves once.
            slot.last_seen = None;
            slot.repeating = false;
        }
    }

    /// Feed a raw key event.
    pub fn handle_event(&mut self, key: KeyEvent, now: Instant) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key.code, now),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    /// Held state for the frame at `now`. Call once per frame: a lone press is
    /// consumed by the first frame that sees it.
    pub fn held(&mut self, now: Instant) -> HeldKeys {
        let timeout = (!self.release_events).then(|| self.timeout());
        HeldKeys {
            left: self.left.take_held(now, timeout),
            right: self.right.take_held(now, timeout),
        }
    }

    pub fn reset(&mut self) {
        self.left = KeyHold::default();
        self.right = KeyHold::default();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_marks_direction_held() {
        let t0 = Instant::now();
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Char('a'), t0);
        assert_eq!(ih.held(t0), HeldKeys { left: true, right: false });
    }

    #[test]
    fn test_non_movement_key_is_ignored() {
        let t0 = Instant::now();
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Up, t0);
        assert_eq!(ih.held(t0), HeldKeys::NONE);
    }

    #[test]
    fn test_auto_release_without_release_events() {
        let t0 = Instant::now();
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Right, t0);

        assert!(ih.held(t0 + Duration::from_millis(50)).right);
        assert!(!ih.held(t0 + Duration::from_millis(51)).right);
    }

    #[test]
    fn test_repeat_events_keep_key_held() {
        let t0 = Instant::now();
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_event(event(KeyCode::Left, KeyEventKind::Press), t0);
        let t1 = t0 + Duration::from_millis(40);
        ih.handle_event(event(KeyCode::Left, KeyEventKind::Repeat), t1);

        assert!(ih.held(t0 + Duration::from_millis(80)).left);
        // Still within the timeout of the last repeat on the following frame.
        assert!(ih.held(t0 + Duration::from_millis(85)).left);
        assert!(!ih.held(t0 + Duration::from_millis(91)).left);
    }

    #[test]
    fn test_single_tap_moves_for_one_frame() {
        let t0 = Instant::now();
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Char('a'), t0);

        let frames: Vec<bool> = (0..60)
            .map(|i| ih.held(t0 + Duration::from_millis(16 * i)).left)
            .collect();
        assert!(frames[0]);
        assert!(frames[1..].iter().all(|held| !held));
    }

    #[test]
    fn test_auto_repeat_holds_every_frame() {
        let t0 = Instant::now();
        let mut ih = InputHandler::new();
        // Terminal auto-repeat at ~32ms, sampled at 16ms frames.
        let frames: Vec<bool> = (0..30u64)
            .map(|frame| {
                let now = t0 + Duration::from_millis(16 * frame);
                if frame % 2 == 0 {
                    ih.handle_key_press(KeyCode::Right, now);
                }
                ih.held(now).right
            })
            .collect();

        // Only the frame before the first repeat is dropped.
        assert!(frames[0]);
        assert!(!frames[1]);
        assert!(frames[2..].iter().all(|held| *held));
    }

    #[test]
    fn test_release_events_disable_timeout() {
        let t0 = Instant::now();
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_event(event(KeyCode::Right, KeyEventKind::Release), t0);
        assert!(ih.has_release_events());

        ih.handle_event(event(KeyCode::Left, KeyEventKind::Press), t0);
        assert!(ih.held(t0 + Duration::from_secs(5)).left);

        ih.handle_event(event(KeyCode::Left, KeyEventKind::Release), t0);
        assert!(!ih.held(t0).left);
    }

    #[test]
    fn test_tap_released_before_frame_still_registers() {
        let t0 = Instant::now();
        let mut ih = InputHandler::new();
        ih.handle_event(event(KeyCode::Char('d'), KeyEventKind::Press), t0);
        ih.handle_event(event(KeyCode::Char('d'), KeyEventKind::Release), t0);

        assert!(ih.held(t0).right);
        assert!(!ih.held(t0 + Duration::from_millis(16)).right);
    }

    #[test]
    fn test_both_keys_can_be_held() {
        let t0 = Instant::now();
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Char('a'), t0);
        ih.handle_key_press(KeyCode::Char('d'), t0);
        let held = ih.held(t0);
        assert_eq!(held, HeldKeys { left: true, right: true });
        assert_eq!(held.direction(), HorizontalDirection::Left);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let t0 = Instant::now();
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Left, t0);
        ih.reset();
        assert_eq!(ih.held(t0), HeldKeys::NONE);
    }
}
