//! # TitleBar Component
//!
//! Single-line header: owner name, current section with its position in
//! the deck, and a transition marker while the navigator is cooling down.
//!
//! Purely presentational — all fields are props, no internal state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct TitleBar<'a> {
    pub owner: &'a str,
    pub section_title: &'a str,
    /// Zero-based position of the current section.
    pub index: usize,
    pub total: usize,
    /// True while the navigator rejects intents (cooldown window).
    pub locked: bool,
    pub theme: &'a Theme,
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let position = format!("{}/{}", self.index + 1, self.total);
        let text = if self.locked {
            format!(
                "folio — {} | {} ({}) | …",
                self.owner, self.section_title, position
            )
        } else {
            format!(
                "folio — {} | {} ({})",
                self.owner, self.section_title, position
            )
        };
        frame.render_widget(Span::styled(text, self.theme.dim_text()), area);
    }
}
