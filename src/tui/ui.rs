//! # Screen Composition
//!
//! Builds each frame: title bar, the current section full-viewport, the
//! indicator dots overlaid on the right edge, and a one-line key hint at
//! the bottom. Layout math lives here so the mouse hit test in the event
//! loop and the renderer can never disagree about where things are.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::Block;

use crate::core::content::Portfolio;
use crate::core::navigator::Navigator;
use crate::core::section::SectionId;
use crate::tui::component::Component;
use crate::tui::components::{
    About, Contact, Education, Experience, Hero, Indicator, Projects, Skills, Splash, TitleBar,
};
use crate::tui::theme::Theme;

const KEY_HINTS: &str = " ↑/↓ navigate · 1-7 jump · t theme · q quit";

/// Splits the frame into title bar, main viewport, and hint line.
/// Shared with mouse hit testing.
pub fn screen_areas(frame_area: Rect) -> (Rect, Rect, Rect) {
    use Constraint::{Length, Min};
    let [title, main, hints] = Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area);
    (title, main, hints)
}

/// Which section, if any, an indicator-dot click at the given position targets.
pub fn hit_test_indicator(
    column: u16,
    row: u16,
    frame_area: Rect,
    total: usize,
) -> Option<usize> {
    let (_, main, _) = screen_areas(frame_area);
    Indicator::hit_test(column, row, main, total)
}

pub fn draw_ui(
    frame: &mut Frame,
    navigator: &Navigator,
    portfolio: &Portfolio,
    theme: &Theme,
    locked: bool,
) {
    let (title_area, main_area, hints_area) = screen_areas(frame.area());
    frame.render_widget(Block::new().style(theme.text()), frame.area());

    let mut title_bar = TitleBar {
        owner: &portfolio.name,
        section_title: navigator.current().title(),
        index: navigator.current_index(),
        total: navigator.len(),
        locked,
        theme,
    };
    title_bar.render(frame, title_area);

    draw_section(frame, main_area, navigator.current(), portfolio, theme);

    let mut indicator = Indicator {
        current: navigator.current_index(),
        total: navigator.len(),
        locked,
        theme,
    };
    indicator.render(frame, main_area);

    frame.render_widget(Span::styled(KEY_HINTS, theme.dim_text()), hints_area);
}

fn draw_section(
    frame: &mut Frame,
    area: Rect,
    section: SectionId,
    portfolio: &Portfolio,
    theme: &Theme,
) {
    match section {
        SectionId::Hero => Hero { portfolio, theme }.render(frame, area),
        SectionId::About => About { portfolio, theme }.render(frame, area),
        SectionId::Skills => Skills { portfolio, theme }.render(frame, area),
        SectionId::Experience => Experience { portfolio, theme }.render(frame, area),
        SectionId::Projects => Projects { portfolio, theme }.render(frame, area),
        SectionId::Education => Education { portfolio, theme }.render(frame, area),
        SectionId::Contact => Contact { portfolio, theme }.render(frame, area),
    }
}

pub fn draw_splash(frame: &mut Frame, portfolio: &Portfolio, theme: &Theme, pulse: f32) {
    frame.render_widget(Block::new().style(theme.text()), frame.area());
    let mut splash = Splash {
        owner: &portfolio.name,
        pulse,
        theme,
    };
    splash.render(frame, frame.area());
}
