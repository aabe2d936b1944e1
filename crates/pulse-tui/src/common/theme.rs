//! Colour palettes selected by the dark mode preference.

use pulse_core::preferences::Preferences;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub like: Color,
    pub error: Color,
    pub loading: Color,
}

impl Theme {
    pub const DARK: Theme = Theme {
        bg: Color::Reset,
        fg: Color::White,
        muted: Color::DarkGray,
        accent: Color::Cyan,
        border: Color::DarkGray,
        selection_bg: Color::Cyan,
        selection_fg: Color::Black,
        like: Color::LightRed,
        error: Color::Red,
        loading: Color::Yellow,
    };

    pub const LIGHT: Theme = Theme {
        bg: Color::White,
        fg: Color::Black,
        muted: Color::Gray,
        accent: Color::Blue,
        border: Color::Gray,
        selection_bg: Color::Blue,
        selection_fg: Color::White,
        like: Color::Red,
        error: Color::Red,
        loading: Color::Magenta,
    };

    pub fn from_preferences(prefs: &Preferences) -> Self {
        if prefs.dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent_bold(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }
}
