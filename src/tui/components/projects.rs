//! # Projects Section

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::content::Portfolio;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct Projects<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
}

impl Component for Projects<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let projects = &self.portfolio.projects;
        if projects.is_empty() {
            return;
        }

        let [body] = Layout::horizontal([Constraint::Max(80)])
            .flex(Flex::Center)
            .areas(area);

        let mut constraints = vec![Constraint::Length(2)];
        // Description wraps to at most two lines at this width; one more for
        // the stack line, two for the borders.
        constraints.extend(projects.iter().map(|_| Constraint::Length(5)));
        let mut rows = Layout::vertical(constraints)
            .flex(Flex::Center)
            .split(body)
            .to_vec();

        let heading_area = rows.remove(0);
        frame.render_widget(
            Paragraph::new(Line::styled("Projects", self.theme.heading_text())).centered(),
            heading_area,
        );

        for (project, row) in projects.iter().zip(rows.iter()) {
            let lines = vec![
                Line::styled(project.description.as_str(), self.theme.text()),
                Line::styled(project.stack.join(" · "), self.theme.dim_text()),
            ];
            let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::bordered()
                    .title(project.name.as_str())
                    .border_style(self.theme.dim_text())
                    .title_style(self.theme.accent_text()),
            );
            frame.render_widget(card, *row);
        }
    }
}
