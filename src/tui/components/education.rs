//! # Education Section

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::content::Portfolio;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct Education<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
}

impl Component for Education<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::styled("Education", self.theme.heading_text()),
            Line::from(""),
        ];
        for entry in &self.portfolio.education {
            lines.push(Line::styled(entry.degree.as_str(), self.theme.accent_text()));
            lines.push(Line::from(vec![
                Span::styled(entry.school.as_str(), self.theme.text()),
                Span::styled(format!("  {}", entry.period), self.theme.dim_text()),
            ]));
            for detail in &entry.details {
                lines.push(Line::styled(detail.as_str(), self.theme.dim_text()));
            }
            lines.push(Line::from(""));
        }

        let height = lines.len() as u16;
        let [body] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).centered(), body);
    }
}
