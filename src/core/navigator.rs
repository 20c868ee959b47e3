//! # Section Navigator
//!
//! Owns the current section index and the transition lock. Every way of
//! moving between sections — keyboard, wheel, swipe, indicator dots —
//! funnels into [`Navigator::handle`], which either commits exactly one
//! index change and opens a cooldown window, or reports why it didn't.
//!
//! Time is passed in by the caller (`Instant::now()` in the event loop,
//! a synthetic clock in tests). The lock is a deadline, not a timer:
//! `is_locked(now)` simply compares against `lock_until`, so expiry is
//! passive and the navigator can never deadlock in the locked state.

use std::time::{Duration, Instant};

use crate::core::section::{SectionDeck, SectionId};

/// How long further intents are rejected after a committed transition.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(300);

/// A navigation request, decoupled from whichever input produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    Advance,
    Retreat,
    GoTo(String),
}

/// What became of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The index changed and the cooldown window is now open.
    Committed { from: usize, to: usize },
    /// Dropped: a transition is still cooling down.
    Locked,
    /// Dropped: target equals the current index (edge of the deck, or
    /// `GoTo` the section already shown). Does not re-enter the lock.
    AtBoundary,
    /// Dropped: `GoTo` named a section id that isn't in the deck.
    /// A contract violation by the caller, surfaced as a value.
    NotFound,
}

impl NavOutcome {
    pub fn committed(self) -> bool {
        matches!(self, NavOutcome::Committed { .. })
    }
}

pub struct Navigator {
    deck: SectionDeck,
    current: usize,
    lock_until: Option<Instant>,
    cooldown: Duration,
}

impl Navigator {
    pub fn new(deck: SectionDeck, cooldown: Duration) -> Self {
        Self {
            deck,
            current: 0,
            lock_until: None,
            cooldown,
        }
    }

    /// Start at the section with the given id instead of the first one.
    /// Unknown ids fall back to index 0.
    pub fn with_start(deck: SectionDeck, cooldown: Duration, start_id: &str) -> Self {
        let start = deck.index_of(start_id).unwrap_or(0);
        let mut nav = Self::new(deck, cooldown);
        nav.current = start;
        nav
    }

    pub fn deck(&self) -> &SectionDeck {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The section currently shown. The deck is non-empty and `current`
    /// is always in bounds, so this cannot miss.
    pub fn current(&self) -> SectionId {
        self.deck
            .get(self.current)
            .unwrap_or(SectionId::Hero)
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    pub fn at_last(&self) -> bool {
        self.current + 1 == self.deck.len()
    }

    pub fn is_locked(&self, now: Instant) -> bool {
        self.lock_until.is_some_and(|until| now < until)
    }

    /// Apply one navigation command. See [`NavOutcome`] for the cases.
    pub fn handle(&mut self, cmd: NavCommand, now: Instant) -> NavOutcome {
        if self.is_locked(now) {
            log::debug!("nav {:?} dropped: locked", cmd);
            return NavOutcome::Locked;
        }

        let target = match &cmd {
            NavCommand::Advance => (self.current + 1).min(self.deck.len() - 1),
            NavCommand::Retreat => self.current.saturating_sub(1),
            NavCommand::GoTo(id) => match self.deck.index_of(id) {
                Some(index) => index,
                None => {
                    log::warn!("nav go-to unknown section id {:?}", id);
                    return NavOutcome::NotFound;
                }
            },
        };

        if target == self.current {
            return NavOutcome::AtBoundary;
        }

        let from = self.current;
        self.current = target;
        self.lock_until = Some(now + self.cooldown);
        log::info!(
            "section {} -> {} ({})",
            from,
            target,
            self.current().id()
        );
        NavOutcome::Committed { from, to: target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Navigator {
        Navigator::new(SectionDeck::default(), DEFAULT_COOLDOWN)
    }

    /// Steps past the cooldown so the next command is accepted.
    fn after_cooldown(now: Instant) -> Instant {
        now + DEFAULT_COOLDOWN + Duration::from_millis(1)
    }

    #[test]
    fn test_starts_at_first_section_unlocked() {
        let nav = nav();
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.current(), SectionId::Hero);
        assert!(!nav.is_locked(Instant::now()));
    }

    #[test]
    fn test_index_stays_in_bounds_under_any_sequence() {
        let mut nav = nav();
        let mut now = Instant::now();
        // Alternating bursts well past both edges.
        for _ in 0..20 {
            nav.handle(NavCommand::Advance, now);
            now = after_cooldown(now);
        }
        assert_eq!(nav.current_index(), nav.len() - 1);
        for _ in 0..20 {
            nav.handle(NavCommand::Retreat, now);
            now = after_cooldown(now);
        }
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_at_most_one_commit_per_lock_window() {
        let mut nav = nav();
        let now = Instant::now();

        assert!(nav.handle(NavCommand::Advance, now).committed());

        // A storm of intents inside the window: none commit.
        for i in 0..10 {
            let t = now + Duration::from_millis(i * 20);
            assert_eq!(nav.handle(NavCommand::Advance, t), NavOutcome::Locked);
        }
        assert_eq!(nav.current_index(), 1);

        // First intent after expiry commits.
        let later = after_cooldown(now);
        assert!(nav.handle(NavCommand::Advance, later).committed());
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn test_boundary_noop_does_not_lock() {
        let mut nav = nav();
        let now = Instant::now();

        assert_eq!(nav.handle(NavCommand::Retreat, now), NavOutcome::AtBoundary);
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.is_locked(now));

        // Same at the far edge.
        let mut t = now;
        while !nav.at_last() {
            nav.handle(NavCommand::Advance, t);
            t = after_cooldown(t);
        }
        assert_eq!(nav.handle(NavCommand::Advance, t), NavOutcome::AtBoundary);
        assert!(!nav.is_locked(t));
    }

    #[test]
    fn test_go_to_unknown_id_is_failure_without_state_change() {
        let mut nav = nav();
        let now = Instant::now();
        assert_eq!(
            nav.handle(NavCommand::GoTo("nonexistent".into()), now),
            NavOutcome::NotFound
        );
        assert_eq!(nav.current_index(), 0);
        assert!(!nav.is_locked(now));
    }

    #[test]
    fn test_go_to_current_section_does_not_relock() {
        let mut nav = nav();
        let now = Instant::now();
        assert_eq!(
            nav.handle(NavCommand::GoTo("hero".into()), now),
            NavOutcome::AtBoundary
        );
        assert!(!nav.is_locked(now));
    }

    #[test]
    fn test_go_to_jumps_and_locks() {
        let mut nav = nav();
        let now = Instant::now();
        assert_eq!(
            nav.handle(NavCommand::GoTo("projects".into()), now),
            NavOutcome::Committed { from: 0, to: 4 }
        );
        assert_eq!(nav.current(), SectionId::Projects);
        assert!(nav.is_locked(now));
    }

    #[test]
    fn test_with_start_section() {
        let nav = Navigator::with_start(SectionDeck::default(), DEFAULT_COOLDOWN, "skills");
        assert_eq!(nav.current(), SectionId::Skills);

        let fallback = Navigator::with_start(SectionDeck::default(), DEFAULT_COOLDOWN, "bogus");
        assert_eq!(fallback.current_index(), 0);
    }

    #[test]
    fn test_end_to_end_three_section_walkthrough() {
        // hero → about (locks) → second advance dropped → cooldown → skills.
        let deck = SectionDeck::new(vec![SectionId::Hero, SectionId::About, SectionId::Skills]);
        let mut nav = Navigator::new(deck, DEFAULT_COOLDOWN);
        let now = Instant::now();

        assert!(nav.handle(NavCommand::Advance, now).committed());
        assert_eq!(nav.current(), SectionId::About);
        assert!(nav.is_locked(now));

        assert_eq!(nav.handle(NavCommand::Advance, now), NavOutcome::Locked);
        assert_eq!(nav.current(), SectionId::About);

        let later = after_cooldown(now);
        assert!(!nav.is_locked(later));
        assert!(nav.handle(NavCommand::Advance, later).committed());
        assert_eq!(nav.current(), SectionId::Skills);
    }
}
