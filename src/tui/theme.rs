//! # Theme
//!
//! Two palettes, dark and light, toggled at runtime with `t`. Components
//! receive the active [`Theme`] as a prop and never hardcode colors.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a configured theme name. Unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    pub fn palette(self) -> Theme {
        match self {
            ThemeKind::Dark => Theme {
                fg: Color::White,
                dim: Color::DarkGray,
                accent: Color::Yellow,
                heading: Color::Cyan,
                bg: Color::Reset,
            },
            ThemeKind::Light => Theme {
                fg: Color::Black,
                dim: Color::Gray,
                accent: Color::Red,
                heading: Color::Blue,
                bg: Color::White,
            },
        }
    }
}

/// The colors components actually draw with.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub heading: Color,
    pub bg: Color,
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dim_text(&self) -> Style {
        Style::default().fg(self.dim).bg(self.bg)
    }

    pub fn accent_text(&self) -> Style {
        Style::default().fg(self.accent).bg(self.bg)
    }

    pub fn heading_text(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }
}
