//! # About Section

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::content::Portfolio;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct About<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
}

impl Component for About<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [body] = Layout::horizontal([Constraint::Max(76)])
            .flex(Flex::Center)
            .areas(area);

        let mut lines = vec![
            Line::styled("About Me", self.theme.heading_text()),
            Line::from(""),
        ];
        for paragraph in &self.portfolio.about {
            lines.push(Line::styled(paragraph.as_str(), self.theme.text()));
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::new().padding(Padding::vertical(area.height / 4)));
        frame.render_widget(paragraph, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::ThemeKind;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_about_renders_all_paragraphs() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let portfolio = Portfolio::default();
        let theme = ThemeKind::Dark.palette();

        terminal
            .draw(|f| {
                let mut about = About {
                    portfolio: &portfolio,
                    theme: &theme,
                };
                about.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("About Me"));
        assert!(text.contains("Arizona State"));
    }
}
