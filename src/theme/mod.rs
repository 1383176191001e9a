mod colors;

use ratatui::style::Color;

pub use colors::*;

use crate::model::StalenessBand;

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Nord,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Nord => "Nord",
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light, Theme::Nord]
    }

    /// From a config name; unknown names fall back to Dark
    pub fn from_name(name: &str) -> Self {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        let all = Theme::all();
        let index = all.iter().position(|t| t == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

/// Colour scheme
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Main background
    pub bg: Color,
    /// Selected row background
    pub bg_secondary: Color,
    /// Selection, shortcuts, titles
    pub highlight: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub overdue: Color,
    pub stale: Color,
    pub fresh: Color,
    pub frozen: Color,
    pub warning: Color,
    pub error: Color,
}

impl ThemeColors {
    pub fn band(&self, band: StalenessBand) -> Color {
        match band {
            StalenessBand::Overdue => self.overdue,
            StalenessBand::Stale => self.stale,
            StalenessBand::Fresh => self.fresh,
        }
    }
}

pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Nord => nord_colors(),
    }
}
