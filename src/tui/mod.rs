//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! section, and feeds raw terminal events through the input unifier into
//! the navigator.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Splash**: draws every ~80ms for the pulse animation.
//! - **Cooldown pending**: polls every ~50ms so the unlock (a deadline,
//!   not a callback) is observed promptly and the indicator un-dims.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! Timers never outlive the loop: both the cooldown and the wheel settle
//! window are deadlines checked against `Instant::now()`, so teardown has
//! nothing to cancel beyond restoring the terminal, which the RAII guard
//! does even on early return.

mod component;
mod components;
mod event;
pub mod theme;
mod ui;

use log::info;
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::config::ResolvedConfig;
use crate::core::input::{Direction, InputUnifier, RawInput};
use crate::core::navigator::{NavCommand, NavOutcome, Navigator};
use crate::core::section::SectionDeck;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::ThemeKind;

/// How long the startup splash stays up before the hero section appears.
const SPLASH_DURATION: Duration = Duration::from_millis(1000);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement is pushed unconditionally: terminals that
        // don't support the protocol ignore it, and capability detection
        // fails in WSL anyway.
        execute!(
            stdout(),
            EnableMouseCapture,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse capture, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut navigator = Navigator::with_start(
        SectionDeck::default(),
        config.cooldown,
        &config.start_section,
    );
    let mut unifier = InputUnifier::new(
        config.wheel_threshold,
        config.settle,
        config.swipe_distance,
    );
    let mut theme_kind = ThemeKind::from_name(&config.theme);
    let portfolio = config.portfolio;

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let start_time = Instant::now();
    let mut splash_until = if config.skip_splash {
        None
    } else {
        Some(start_time + SPLASH_DURATION)
    };

    let mut needs_redraw = true; // Force first frame
    let mut drawn_locked = false;

    loop {
        let now = Instant::now();
        if let Some(until) = splash_until
            && now >= until
        {
            splash_until = None;
            needs_redraw = true;
        }

        // The lock expiring changes the chrome (indicator un-dims) without
        // any event arriving, so watch for the flip.
        let locked = navigator.is_locked(now);
        if locked != drawn_locked {
            needs_redraw = true;
        }

        if needs_redraw {
            let theme = theme_kind.palette();
            if splash_until.is_some() {
                let elapsed = start_time.elapsed().as_secs_f32();
                let pulse = (elapsed * 5.0).sin() * 0.5 + 0.5;
                terminal.draw(|f| ui::draw_splash(f, &portfolio, &theme, pulse))?;
            } else {
                terminal.draw(|f| ui::draw_ui(f, &navigator, &portfolio, &theme, locked))?;
            }
            drawn_locked = locked;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while animating or a deadline is
        // pending, long when idle.
        let timeout = if splash_until.is_some() {
            Duration::from_millis(80)
        } else if locked {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        if splash_until.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw.
        // Draining matters here: a trackpad flick can queue dozens of wheel
        // events, and they must all hit the unifier inside one settle window.
        // Each handled event schedules its own repaint, so an event admitted
        // only via the drain still gets drawn.
        let mut should_quit = false;
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let outcome = process_event(
                event,
                Instant::now(),
                frame_area,
                &mut splash_until,
                &mut theme_kind,
                &mut unifier,
                &mut navigator,
            );
            needs_redraw |= outcome.redraw;
            should_quit |= outcome.quit;
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

struct EventOutcome {
    redraw: bool,
    quit: bool,
}

/// Apply one translated terminal event to the app state. The caller owns the
/// redraw flag, so every handled event reports whether a repaint is due.
fn process_event(
    event: TuiEvent,
    now: Instant,
    frame_area: Rect,
    splash_until: &mut Option<Instant>,
    theme_kind: &mut ThemeKind,
    unifier: &mut InputUnifier,
    navigator: &mut Navigator,
) -> EventOutcome {
    if matches!(event, TuiEvent::Quit | TuiEvent::ForceQuit) {
        return EventOutcome {
            redraw: false,
            quit: true,
        };
    }

    // Any input skips the splash; the event itself is swallowed.
    if splash_until.is_some() && !matches!(event, TuiEvent::Resize) {
        *splash_until = None;
        return EventOutcome {
            redraw: true,
            quit: false,
        };
    }

    match event {
        TuiEvent::ToggleTheme => {
            *theme_kind = theme_kind.toggled();
        }
        TuiEvent::JumpTo(index) => {
            if let Some(section) = navigator.deck().get(index) {
                apply(navigator, NavCommand::GoTo(section.id().into()), now);
            }
        }
        TuiEvent::Input(raw) => {
            if let Some(direction) = unifier.feed(raw, now) {
                apply(navigator, command_for(direction), now);
            }
        }
        TuiEvent::TouchRelease { column, row } => match unifier.feed(RawInput::TouchEnd, now) {
            Some(direction) => {
                apply(navigator, command_for(direction), now);
            }
            None => {
                // Not a swipe — treat the release as a click on the
                // indicator dots, if it lands on one.
                if let Some(index) = ui::hit_test_indicator(column, row, frame_area, navigator.len())
                    && let Some(section) = navigator.deck().get(index)
                {
                    apply(navigator, NavCommand::GoTo(section.id().into()), now);
                }
            }
        },
        TuiEvent::Resize => {}
        // Handled before the match.
        TuiEvent::Quit | TuiEvent::ForceQuit => {}
    }

    EventOutcome {
        redraw: true,
        quit: false,
    }
}

fn command_for(direction: Direction) -> NavCommand {
    match direction {
        Direction::Forward => NavCommand::Advance,
        Direction::Backward => NavCommand::Retreat,
    }
}

/// Hand a command to the navigator and log boundary entry/exit, which the
/// next frame's chrome reflects.
fn apply(navigator: &mut Navigator, cmd: NavCommand, now: Instant) -> NavOutcome {
    let outcome = navigator.handle(cmd, now);
    if outcome.committed() && (navigator.at_first() || navigator.at_last()) {
        info!("reached deck boundary at {}", navigator.current().id());
    }
    outcome
}
