//! Theme and style definitions

use ratatui::style::{Color, Modifier, Style};

/// Theme colors (single dark palette)
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

/// Current color scheme
pub fn colors() -> ThemeColors {
    ThemeColors {
        fg: Color::Rgb(212, 212, 212),
        border: Color::Rgb(62, 62, 62),
        border_focused: Color::Rgb(0, 122, 204),
        highlight: Color::Rgb(0, 122, 204),
        selected_bg: Color::Rgb(38, 79, 120),
        selected_fg: Color::White,
        success: Color::Rgb(78, 201, 176),
        error: Color::Rgb(244, 135, 113),
        muted: Color::Rgb(128, 128, 128),
    }
}

/// Common styles
pub struct Styles;

impl Styles {
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
