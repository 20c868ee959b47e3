//! # Terminal Events
//!
//! Translates crossterm events into the small vocabulary the event loop
//! understands. Terminal input has no real touch or pixel-granular wheel,
//! so two conventions bridge the gap:
//!
//! - a wheel notch is reported as a fixed delta (`WHEEL_NOTCH_DELTA`),
//!   comfortably above the default noise threshold;
//! - a left-button press/drag/release sequence plays the role of a touch
//!   contact, with rows scaled by `CELL_PIXELS` so the default swipe
//!   distance of 50 means "about two rows of drag".

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::core::input::{Direction, RawInput};

/// Delta reported for one wheel notch. Terminals don't expose magnitude,
/// so every notch is a deliberate gesture, not jitter.
pub const WHEEL_NOTCH_DELTA: i32 = 20;

/// Approximate pixel height of a terminal cell, used to scale drag rows
/// into the same units as the swipe-distance threshold.
pub const CELL_PIXELS: i32 = 25;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit,
    /// A raw navigation input for the unifier.
    Input(RawInput),
    /// Number key 1..=9: jump to that section (1-based).
    JumpTo(usize),
    /// Release position, kept for indicator-dot hit testing when the
    /// drag didn't qualify as a swipe.
    TouchRelease { column: u16, row: u16 },
    ToggleTheme,
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    translate(event::read().ok()?)
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => {
            // Kitty-protocol terminals also report releases; only act on press.
            if key.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("key event: {:?} {:?}", key.code, key.modifiers);
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('t')) => Some(TuiEvent::ToggleTheme),
                (_, KeyCode::Down | KeyCode::PageDown) | (_, KeyCode::Char('j')) => {
                    Some(TuiEvent::Input(RawInput::Key(Direction::Forward)))
                }
                (_, KeyCode::Up | KeyCode::PageUp) | (_, KeyCode::Char('k')) => {
                    Some(TuiEvent::Input(RawInput::Key(Direction::Backward)))
                }
                (_, KeyCode::Char(c @ '1'..='9')) => {
                    Some(TuiEvent::JumpTo(c as usize - '1' as usize))
                }
                _ => None,
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(TuiEvent::Input(RawInput::Wheel {
                delta: WHEEL_NOTCH_DELTA,
            })),
            MouseEventKind::ScrollUp => Some(TuiEvent::Input(RawInput::Wheel {
                delta: -WHEEL_NOTCH_DELTA,
            })),
            MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::Input(RawInput::TouchStart {
                y: mouse.row as i32 * CELL_PIXELS,
            })),
            MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::Input(RawInput::TouchMove {
                y: mouse.row as i32 * CELL_PIXELS,
            })),
            MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::TouchRelease {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(
            translate(key(KeyCode::Down)),
            Some(TuiEvent::Input(RawInput::Key(Direction::Forward)))
        );
        assert_eq!(
            translate(key(KeyCode::Up)),
            Some(TuiEvent::Input(RawInput::Key(Direction::Backward)))
        );
        assert_eq!(
            translate(key(KeyCode::Char('j'))),
            Some(TuiEvent::Input(RawInput::Key(Direction::Forward)))
        );
    }

    #[test]
    fn test_number_keys_jump_zero_based() {
        assert_eq!(translate(key(KeyCode::Char('1'))), Some(TuiEvent::JumpTo(0)));
        assert_eq!(translate(key(KeyCode::Char('7'))), Some(TuiEvent::JumpTo(6)));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_scroll_maps_to_wheel_delta() {
        let scroll = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate(scroll),
            Some(TuiEvent::Input(RawInput::Wheel {
                delta: WHEEL_NOTCH_DELTA
            }))
        );
    }

    #[test]
    fn test_drag_scales_rows_to_pixels() {
        let drag = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 3,
            row: 8,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate(drag),
            Some(TuiEvent::Input(RawInput::TouchMove {
                y: 8 * CELL_PIXELS
            }))
        );
    }

    #[test]
    fn test_release_keeps_position_for_hit_testing() {
        let up = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 79,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate(up),
            Some(TuiEvent::TouchRelease { column: 79, row: 10 })
        );
    }
}
