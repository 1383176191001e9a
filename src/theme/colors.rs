//! Theme colour definitions

use ratatui::style::Color;

use super::ThemeColors;

/// Dark theme (default)
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),
        bg_secondary: Color::Rgb(48, 48, 48),
        highlight: Color::Rgb(0, 255, 136),
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        overdue: Color::Rgb(255, 85, 85),
        stale: Color::Rgb(255, 165, 0),
        fresh: Color::Rgb(0, 255, 136),
        frozen: Color::Rgb(100, 181, 246),
        warning: Color::Rgb(255, 213, 79),
        error: Color::Rgb(255, 85, 85),
    }
}

/// Light theme
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),
        bg_secondary: Color::Rgb(230, 230, 230),
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        overdue: Color::Rgb(200, 50, 50),
        stale: Color::Rgb(200, 120, 0),
        fresh: Color::Rgb(0, 150, 80),
        frozen: Color::Rgb(33, 150, 243),
        warning: Color::Rgb(255, 152, 0),
        error: Color::Rgb(200, 50, 50),
    }
}

/// Nord
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),
        bg_secondary: Color::Rgb(59, 66, 82),
        highlight: Color::Rgb(136, 192, 208),
        text: Color::Rgb(236, 239, 244),
        muted: Color::Rgb(129, 161, 193),
        border: Color::Rgb(76, 86, 106),
        overdue: Color::Rgb(191, 97, 106),
        stale: Color::Rgb(235, 203, 139),
        fresh: Color::Rgb(163, 190, 140),
        frozen: Color::Rgb(94, 129, 172),
        warning: Color::Rgb(235, 203, 139),
        error: Color::Rgb(191, 97, 106),
    }
}
