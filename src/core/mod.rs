//! # Core Navigation Logic
//!
//! Everything the terminal layer builds on, with no ratatui or crossterm
//! types anywhere in it.
//!
//! ```text
//!   raw events ──▶ InputUnifier ──▶ Direction ──▶ Navigator ──▶ index
//!                  (filter/classify)              (lock-gated commit)
//! ```
//!
//! Both halves are deadline-based rather than timer-based: the event loop
//! passes `Instant::now()` in, tests pass synthetic instants. That keeps
//! the check-then-commit step atomic (nothing suspends between the lock
//! check and the mutation) and makes every temporal rule unit-testable.
//!
//! ## Modules
//!
//! - [`section`]: the fixed ordered deck of portfolio sections
//! - [`navigator`]: current index + transition lock, the single writer
//! - [`input`]: per-source filtering/debouncing into one intent stream
//! - [`content`]: the portfolio data each section renders
//! - [`config`]: settings with defaults → file → env → CLI resolution

pub mod config;
pub mod content;
pub mod input;
pub mod navigator;
pub mod section;
