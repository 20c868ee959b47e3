//! # Skills Section
//!
//! One column per skill group, side by side.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::content::Portfolio;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct Skills<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
}

impl Component for Skills<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let groups = &self.portfolio.skills;
        if groups.is_empty() {
            return;
        }

        let tallest = groups.iter().map(|g| g.items.len()).max().unwrap_or(0) as u16;
        let [body] = Layout::vertical([Constraint::Length(tallest + 4)])
            .flex(Flex::Center)
            .areas(area);
        let [heading_area, columns_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(body);

        frame.render_widget(
            Paragraph::new(Line::styled("Skills", self.theme.heading_text())).centered(),
            heading_area,
        );

        let column_width = (columns_area.width / groups.len() as u16).min(24);
        let constraints: Vec<Constraint> = groups
            .iter()
            .map(|_| Constraint::Length(column_width))
            .collect();
        let columns = Layout::horizontal(constraints)
            .flex(Flex::Center)
            .split(columns_area);

        for (group, column) in groups.iter().zip(columns.iter()) {
            let mut lines = vec![Line::styled(group.category.as_str(), self.theme.accent_text())];
            for item in &group.items {
                lines.push(Line::styled(format!("• {item}"), self.theme.text()));
            }
            frame.render_widget(
                Paragraph::new(lines).block(Block::new()),
                *column,
            );
        }
    }
}
