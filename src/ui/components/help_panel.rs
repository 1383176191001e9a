//! Shortcut help panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

const PANEL_WIDTH: u16 = 38;
const PANEL_HEIGHT: u16 = 24;

pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();

    let x = area.width.saturating_sub(PANEL_WIDTH) / 2;
    let y = area.height.saturating_sub(PANEL_HEIGHT) / 2;
    let panel_area = Rect::new(
        x,
        y,
        PANEL_WIDTH.min(area.width),
        PANEL_HEIGHT.min(area.height),
    );

    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    frame.render_widget(Paragraph::new(build_help_lines(colors)).block(block), panel_area);
}

fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Navigation", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("Tab", "Queue / fresh list", colors),
        key_line("h", "Switch household", colors),
        Line::from(""),
        section_header("Tasks", colors),
        key_line("c / Enter", "Complete task", colors),
        key_line("n", "New task", colors),
        key_line("f", "Freeze / unfreeze", colors),
        key_line("d", "Delete task", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("r", "Refresh now", colors),
        key_line("t", "Cycle theme", colors),
        key_line("?", "Toggle help", colors),
        key_line("q", "Quit", colors),
        Line::from(""),
        section_header("Staleness", colors),
        band_line("■ overdue", colors.overdue),
        band_line("■ stale", colors.stale),
        band_line("■ fresh", colors.fresh),
    ]
}

fn section_header(title: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("   {:<12}", key), Style::default().fg(colors.text)),
        Span::styled(desc.to_string(), Style::default().fg(colors.muted)),
    ])
}

fn band_line(label: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(format!("   {}", label), Style::default().fg(color)))
}
