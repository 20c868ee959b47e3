//! # Experience Section
//!
//! One bordered card per role, newest first (the content order).

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::content::{ExperienceEntry, Portfolio};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct Experience<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
}

impl Experience<'_> {
    fn card_lines<'a>(&self, entry: &'a ExperienceEntry) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(entry.company.as_str(), self.theme.accent_text()),
                Span::styled(
                    format!("  {} · {}", entry.period, entry.location),
                    self.theme.dim_text(),
                ),
            ]),
            Line::from(""),
        ];
        for achievement in &entry.achievements {
            lines.push(Line::styled(format!("• {achievement}"), self.theme.text()));
        }
        lines
    }
}

impl Component for Experience<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let entries = &self.portfolio.experience;
        if entries.is_empty() {
            return;
        }

        let [body] = Layout::horizontal([Constraint::Max(80)])
            .flex(Flex::Center)
            .areas(area);

        // Heading plus one card per entry: content rows + 2 border rows each.
        let mut constraints = vec![Constraint::Length(2)];
        for entry in entries {
            constraints.push(Constraint::Length(entry.achievements.len() as u16 + 4));
        }
        let mut rows = Layout::vertical(constraints)
            .flex(Flex::Center)
            .split(body)
            .to_vec();

        let heading_area = rows.remove(0);
        frame.render_widget(
            Paragraph::new(Line::styled(
                "Professional Experience",
                self.theme.heading_text(),
            ))
            .centered(),
            heading_area,
        );

        for (entry, row) in entries.iter().zip(rows.iter()) {
            let card = Paragraph::new(self.card_lines(entry))
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .title(entry.title.as_str())
                        .border_style(self.theme.dim_text())
                        .title_style(self.theme.text()),
                );
            frame.render_widget(card, *row);
        }
    }
}
