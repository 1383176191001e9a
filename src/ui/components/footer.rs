use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Bottom shortcut bar
pub fn render(frame: &mut Frame, area: Rect, has_household: bool, has_selection: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(has_household, has_selection);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn get_shortcuts(has_household: bool, has_selection: bool) -> Vec<(&'static str, &'static str)> {
    if !has_household {
        return vec![("h", "household"), ("?", "help"), ("q", "quit")];
    }
    if has_selection {
        vec![
            ("c", "complete"),
            ("n", "new"),
            ("f", "freeze"),
            ("d", "delete"),
            ("Tab", "pane"),
            ("h", "household"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        vec![
            ("n", "new"),
            ("Tab", "pane"),
            ("h", "household"),
            ("r", "refresh"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}
