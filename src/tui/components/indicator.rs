//! # Section Indicator
//!
//! The column of dots on the right edge: one per section, the current one
//! filled, the whole column dimmed while the navigator is cooling down so
//! it doubles as the lock affordance. Dots are click targets — the hit
//! test lives here next to the geometry that defines it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Columns from the right edge where the dots are drawn.
const RIGHT_MARGIN: u16 = 2;

pub struct Indicator<'a> {
    pub current: usize,
    pub total: usize,
    pub locked: bool,
    pub theme: &'a Theme,
}

impl Indicator<'_> {
    /// The one-cell-wide strip the dots occupy, vertically centered.
    fn strip(area: Rect, total: usize) -> Rect {
        let height = (total as u16).min(area.height);
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let x = (area.x + area.width).saturating_sub(1 + RIGHT_MARGIN);
        Rect::new(x, y, 1, height)
    }

    /// Which dot, if any, sits at the given terminal position.
    pub fn hit_test(column: u16, row: u16, area: Rect, total: usize) -> Option<usize> {
        let strip = Self::strip(area, total);
        if column != strip.x || row < strip.y || row >= strip.y + strip.height {
            return None;
        }
        Some((row - strip.y) as usize)
    }
}

impl Component for Indicator<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let strip = Self::strip(area, self.total);
        for i in 0..strip.height as usize {
            let cell = Rect::new(strip.x, strip.y + i as u16, 1, 1);
            let span = if i == self.current && self.locked {
                Span::styled("●", self.theme.dim_text())
            } else if i == self.current {
                Span::styled("●", self.theme.accent_text())
            } else {
                Span::styled("○", self.theme.dim_text())
            };
            frame.render_widget(span, cell);
        }
    }
}
