//! # Input Unifier
//!
//! Collapses three independent raw input sources — key presses, wheel
//! deltas, and a touch-style drag sequence — into one normalized intent
//! stream: at most one [`Direction`] per qualifying gesture.
//!
//! The unifier only filters and classifies. It does not know about the
//! navigator's lock; serializing acceptance is the navigator's job. Like
//! the navigator, it is deadline-based: the caller supplies `now`, so the
//! wheel settle window needs no timer and tests control time directly.
//!
//! Per-source rules:
//! - **Key**: already discrete, passed through unchanged.
//! - **Wheel**: the terminal reports many delta events per physical flick.
//!   Deltas below a noise threshold are dropped. The first admitted event
//!   emits its sign as the intent — at gesture start, so latency stays
//!   low — and opens a settle window during which every wheel event is
//!   dropped, opposite-direction ones included (a fast flick often jitters
//!   at its inflection point; letting the reversal through would bounce
//!   the view straight back).
//! - **Touch**: y at contact start, updated on every move; on release the
//!   net displacement (start − end) is classified. Magnitude at or above
//!   the swipe distance emits one intent, anything less is a tap. State
//!   is cleared on every release so the next contact starts clean.

use std::time::{Duration, Instant};

/// Wheel deltas with magnitude below this are treated as jitter.
pub const DEFAULT_WHEEL_THRESHOLD: i32 = 10;
/// How long wheel events are suppressed after an admitted gesture.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(500);
/// Minimum net vertical displacement for a drag to count as a swipe.
pub const DEFAULT_SWIPE_DISTANCE: i32 = 50;

/// Normalized navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the next section (arrow down, scroll down, swipe up).
    Forward,
    /// Toward the previous section.
    Backward,
}

/// A raw platform input event, reduced to the payload the unifier needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    /// A discrete directional key press.
    Key(Direction),
    /// One wheel/trackpad delta event. Sign follows scroll direction:
    /// positive scrolls toward the next section.
    Wheel { delta: i32 },
    /// Contact started at the given vertical coordinate.
    TouchStart { y: i32 },
    /// Contact moved to the given vertical coordinate.
    TouchMove { y: i32 },
    /// Contact ended; classify the accumulated displacement.
    TouchEnd,
}

pub struct InputUnifier {
    wheel_threshold: i32,
    settle: Duration,
    swipe_distance: i32,
    /// Open wheel settle window, if any. Events are dropped until it passes.
    settle_until: Option<Instant>,
    touch_start_y: Option<i32>,
    touch_last_y: Option<i32>,
}

impl InputUnifier {
    pub fn new(wheel_threshold: i32, settle: Duration, swipe_distance: i32) -> Self {
        Self {
            wheel_threshold,
            settle,
            swipe_distance,
            settle_until: None,
            touch_start_y: None,
            touch_last_y: None,
        }
    }

    /// Feed one raw event; returns the intent it produced, if any.
    pub fn feed(&mut self, input: RawInput, now: Instant) -> Option<Direction> {
        match input {
            RawInput::Key(direction) => Some(direction),
            RawInput::Wheel { delta } => self.feed_wheel(delta, now),
            RawInput::TouchStart { y } => {
                self.touch_start_y = Some(y);
                self.touch_last_y = Some(y);
                None
            }
            RawInput::TouchMove { y } => {
                // A move with no prior start is malformed; ignore it rather
                // than invent a gesture origin.
                if self.touch_start_y.is_some() {
                    self.touch_last_y = Some(y);
                }
                None
            }
            RawInput::TouchEnd => self.finish_touch(),
        }
    }

    fn feed_wheel(&mut self, delta: i32, now: Instant) -> Option<Direction> {
        if self.settle_until.is_some_and(|until| now < until) {
            return None;
        }
        if delta.abs() < self.wheel_threshold {
            return None;
        }
        self.settle_until = Some(now + self.settle);
        if delta > 0 {
            Some(Direction::Forward)
        } else {
            Some(Direction::Backward)
        }
    }

    fn finish_touch(&mut self) -> Option<Direction> {
        let start = self.touch_start_y.take();
        let end = self.touch_last_y.take();
        let (start, end) = (start?, end?);

        // Finger moving up gives a positive displacement: advance.
        let displacement = start - end;
        if displacement.abs() < self.swipe_distance {
            log::debug!("touch displacement {} below swipe distance", displacement);
            return None;
        }
        if displacement > 0 {
            Some(Direction::Forward)
        } else {
            Some(Direction::Backward)
        }
    }
}

impl Default for InputUnifier {
    fn default() -> Self {
        Self::new(DEFAULT_WHEEL_THRESHOLD, DEFAULT_SETTLE, DEFAULT_SWIPE_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_passes_through() {
        let mut unifier = InputUnifier::default();
        let now = Instant::now();
        assert_eq!(
            unifier.feed(RawInput::Key(Direction::Forward), now),
            Some(Direction::Forward)
        );
        assert_eq!(
            unifier.feed(RawInput::Key(Direction::Backward), now),
            Some(Direction::Backward)
        );
    }

    #[test]
    fn test_wheel_burst_emits_exactly_one_intent() {
        let mut unifier = InputUnifier::default();
        let now = Instant::now();

        let mut intents = 0;
        for i in 0..20 {
            let t = now + Duration::from_millis(i * 10);
            if unifier.feed(RawInput::Wheel { delta: 40 }, t).is_some() {
                intents += 1;
            }
        }
        assert_eq!(intents, 1);
    }

    #[test]
    fn test_wheel_below_threshold_ignored() {
        let mut unifier = InputUnifier::default();
        let now = Instant::now();
        assert_eq!(unifier.feed(RawInput::Wheel { delta: 9 }, now), None);
        assert_eq!(unifier.feed(RawInput::Wheel { delta: -9 }, now), None);
        // Sub-threshold noise must not open a settle window.
        assert_eq!(
            unifier.feed(RawInput::Wheel { delta: 40 }, now),
            Some(Direction::Forward)
        );
    }

    #[test]
    fn test_wheel_reversal_inside_settle_window_suppressed() {
        let mut unifier = InputUnifier::default();
        let now = Instant::now();

        assert_eq!(
            unifier.feed(RawInput::Wheel { delta: 40 }, now),
            Some(Direction::Forward)
        );
        // Inflection-point jitter: opposite sign, still inside the window.
        let t = now + Duration::from_millis(100);
        assert_eq!(unifier.feed(RawInput::Wheel { delta: -40 }, t), None);
    }

    #[test]
    fn test_wheel_new_gesture_after_settle_window() {
        let mut unifier = InputUnifier::default();
        let now = Instant::now();

        assert!(unifier.feed(RawInput::Wheel { delta: 40 }, now).is_some());
        let later = now + DEFAULT_SETTLE + Duration::from_millis(1);
        assert_eq!(
            unifier.feed(RawInput::Wheel { delta: -40 }, later),
            Some(Direction::Backward)
        );
    }

    #[test]
    fn test_swipe_at_threshold_counts_below_does_not() {
        let now = Instant::now();

        // Displacement 51: swipe up, advance.
        let mut unifier = InputUnifier::default();
        unifier.feed(RawInput::TouchStart { y: 500 }, now);
        unifier.feed(RawInput::TouchMove { y: 449 }, now);
        assert_eq!(
            unifier.feed(RawInput::TouchEnd, now),
            Some(Direction::Forward)
        );

        // Displacement 48: tap-ish, nothing.
        let mut unifier = InputUnifier::default();
        unifier.feed(RawInput::TouchStart { y: 500 }, now);
        unifier.feed(RawInput::TouchMove { y: 452 }, now);
        assert_eq!(unifier.feed(RawInput::TouchEnd, now), None);

        // Displacement exactly 50 qualifies.
        let mut unifier = InputUnifier::default();
        unifier.feed(RawInput::TouchStart { y: 500 }, now);
        unifier.feed(RawInput::TouchMove { y: 450 }, now);
        assert_eq!(
            unifier.feed(RawInput::TouchEnd, now),
            Some(Direction::Forward)
        );
    }

    #[test]
    fn test_swipe_down_retreats() {
        let mut unifier = InputUnifier::default();
        let now = Instant::now();
        unifier.feed(RawInput::TouchStart { y: 200 }, now);
        unifier.feed(RawInput::TouchMove { y: 300 }, now);
        assert_eq!(
            unifier.feed(RawInput::TouchEnd, now),
            Some(Direction::Backward)
        );
    }

    #[test]
    fn test_touch_end_without_start_is_noop() {
        let mut unifier = InputUnifier::default();
        let now = Instant::now();
        assert_eq!(unifier.feed(RawInput::TouchEnd, now), None);
        // Stray move with no contact also ignored.
        assert_eq!(unifier.feed(RawInput::TouchMove { y: 10 }, now), None);
        assert_eq!(unifier.feed(RawInput::TouchEnd, now), None);
    }

    #[test]
    fn test_touch_state_resets_after_every_end() {
        let mut unifier = InputUnifier::default();
        let now = Instant::now();

        unifier.feed(RawInput::TouchStart { y: 500 }, now);
        unifier.feed(RawInput::TouchMove { y: 400 }, now);
        assert!(unifier.feed(RawInput::TouchEnd, now).is_some());

        // The old origin must be gone: a bare end emits nothing.
        assert_eq!(unifier.feed(RawInput::TouchEnd, now), None);

        // And a fresh gesture measures from its own start.
        unifier.feed(RawInput::TouchStart { y: 100 }, now);
        assert_eq!(unifier.feed(RawInput::TouchEnd, now), None);
    }

    #[test]
    fn test_tap_without_move_is_noop() {
        let mut unifier = InputUnifier::default();
        let now = Instant::now();
        unifier.feed(RawInput::TouchStart { y: 42 }, now);
        assert_eq!(unifier.feed(RawInput::TouchEnd, now), None);
    }

    #[test]
    fn test_sources_are_independent() {
        // A pending touch gesture doesn't block keys or wheel.
        let mut unifier = InputUnifier::default();
        let now = Instant::now();
        unifier.feed(RawInput::TouchStart { y: 500 }, now);
        assert_eq!(
            unifier.feed(RawInput::Key(Direction::Forward), now),
            Some(Direction::Forward)
        );
        assert_eq!(
            unifier.feed(RawInput::Wheel { delta: 40 }, now),
            Some(Direction::Forward)
        );
        unifier.feed(RawInput::TouchMove { y: 400 }, now);
        assert_eq!(
            unifier.feed(RawInput::TouchEnd, now),
            Some(Direction::Forward)
        );
    }
}
