//! Shared dialog rendering helpers

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Truncate to `max_len` characters, ending in an ellipsis when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(max_len - 1).collect::<String>())
    }
}

/// Centered dialog area, clamped to the frame
pub fn center_dialog(frame_area: Rect, width: u16, height: u16) -> Rect {
    let x = frame_area.x + frame_area.width.saturating_sub(width) / 2;
    let y = frame_area.y + frame_area.height.saturating_sub(height) / 2;
    Rect::new(
        x,
        y,
        width.min(frame_area.width),
        height.min(frame_area.height),
    )
}

/// Draw the dialog frame (title, border) and return the inner area
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    colors: &ThemeColors,
) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Hint row, `hints` as [(key, description), ...]
pub fn render_hint(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], colors: &ThemeColors) {
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, desc))| {
            let mut v = vec![];
            if i > 0 {
                v.push(Span::styled("  ", Style::default().fg(colors.muted)));
            }
            v.push(Span::styled(*key, Style::default().fg(colors.highlight)));
            v.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(colors.muted),
            ));
            v
        })
        .collect();

    let hint = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

/// A labelled input line; the focused field gets a cursor
pub fn input_line(label: &str, value: &str, focused: bool, colors: &ThemeColors) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };
    let mut spans = vec![
        Span::styled(format!("  {:<12}", label), label_style),
        Span::styled(value.to_string(), Style::default().fg(colors.text)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }
    Line::from(spans)
}

/// Checkbox row for multi-select lists
pub fn checkbox_line(
    label: &str,
    checked: bool,
    under_cursor: bool,
    colors: &ThemeColors,
) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if under_cursor {
        Style::default()
            .fg(colors.highlight)
            .bg(colors.bg_secondary)
            .add_modifier(Modifier::BOLD)
    } else if checked {
        Style::default().fg(colors.text)
    } else {
        Style::default().fg(colors.muted)
    };
    Line::from(Span::styled(format!("   {} {}", mark, label), style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("dishes", 10), "dishes");
        assert_eq!(truncate("vacuum the stairs", 8), "vacuum …");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_center_dialog_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let r = center_dialog(area, 40, 4);
        assert_eq!(r.width, 20);
        assert_eq!(r.x, 0);
        assert_eq!(r.y, 3);
    }
}
