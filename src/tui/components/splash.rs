//! # Splash Component
//!
//! Brief startup frame before the hero section, standing in for the
//! original's loading screen. A pulsing monogram and a "loading" line;
//! dismissed by the timer in the event loop or by any key.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct Splash<'a> {
    pub owner: &'a str,
    /// 0.0..=1.0, driven by the event loop's animation clock.
    pub pulse: f32,
    pub theme: &'a Theme,
}

impl Splash<'_> {
    /// Initials drawn as the monogram, e.g. "Sakshi Khade" → "SK".
    fn monogram(&self) -> String {
        self.owner
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

impl Component for Splash<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let monogram_style = if self.pulse > 0.5 {
            self.theme.accent_text().add_modifier(Modifier::BOLD)
        } else {
            self.theme.accent_text()
        };
        let lines = vec![
            Line::from(Span::styled(format!("[ {} ]", self.monogram()), monogram_style)),
            Line::from(""),
            Line::from(Span::styled("Loading...", self.theme.dim_text())),
        ];

        let [block] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            block,
        );
    }
}
