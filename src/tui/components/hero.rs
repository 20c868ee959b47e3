//! # Hero Section
//!
//! The opening panel: name, tagline, and a navigation hint, centered in
//! the viewport like the original landing view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::content::Portfolio;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct Hero<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
}

impl Hero<'_> {
    /// Width of the widest line, for sizing the centered block.
    fn content_width(&self) -> u16 {
        self.portfolio
            .name
            .width()
            .max(self.portfolio.tagline.width()) as u16
    }
}

impl Component for Hero<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.portfolio.name.as_str(),
                self.theme.heading_text(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.portfolio.tagline.as_str(),
                self.theme.accent_text(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "↓ scroll, swipe, or arrow keys to explore",
                self.theme.dim_text(),
            )),
        ];
        let height = lines.len() as u16;
        let width = self.content_width().max(42).min(area.width);

        let [block] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [block] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(block);

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            block,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::ThemeKind;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_hero_renders_name_and_tagline() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let portfolio = Portfolio::default();
        let theme = ThemeKind::Dark.palette();

        terminal
            .draw(|f| {
                let mut hero = Hero {
                    portfolio: &portfolio,
                    theme: &theme,
                };
                hero.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Sakshi Khade"));
        assert!(text.contains("AI & Robotics Engineer"));
    }
}
