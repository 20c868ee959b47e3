//! # Contact Section
//!
//! Read-only contact channels. The original site's form submission is
//! deliberately out of scope; channels render as label/value pairs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::content::Portfolio;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct Contact<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
}

impl Component for Contact<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let channels = &self.portfolio.contact;
        let label_width = channels.iter().map(|c| c.label.width()).max().unwrap_or(0);

        let mut lines = vec![
            Line::styled("Get In Touch", self.theme.heading_text()),
            Line::from(""),
        ];
        for channel in channels {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>label_width$}  ", channel.label),
                    self.theme.accent_text(),
                ),
                Span::styled(channel.value.as_str(), self.theme.text()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("© 2024 {}. All rights reserved.", self.portfolio.name),
            self.theme.dim_text(),
        ));

        let height = lines.len() as u16 + 2;
        let width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16 + 6;
        let [body] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [body] = Layout::horizontal([Constraint::Length(width.min(area.width))])
            .flex(Flex::Center)
            .areas(body);

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::bordered().border_style(self.theme.dim_text())),
            body,
        );
    }
}
