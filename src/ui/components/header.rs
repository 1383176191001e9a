use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Header height including borders
pub const HEADER_HEIGHT: u16 = 3;

/// Connection state shown on the right of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// No household selected, nothing to poll
    Idle,
    Live,
    /// Last poll failed; showing cached data
    Offline,
}

/// Title bar: app name, household, user, poll status
pub fn render(
    frame: &mut Frame,
    area: Rect,
    household: Option<&str>,
    username: Option<&str>,
    status: PollStatus,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(28)]).areas(inner);

    let household_span = match household {
        Some(name) => Span::styled(
            name.to_string(),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("no household (press h)", Style::default().fg(colors.muted)),
    };
    let left = Line::from(vec![
        Span::styled(
            " choreboard ",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(colors.border)),
        household_span,
    ]);
    frame.render_widget(Paragraph::new(left), left_area);

    let (dot, label, dot_color) = match status {
        PollStatus::Idle => ("○", "idle", colors.muted),
        PollStatus::Live => ("●", "live", colors.fresh),
        PollStatus::Offline => ("●", "offline", colors.error),
    };
    let mut right = vec![];
    if let Some(name) = username {
        right.push(Span::styled(format!("{}  ", name), Style::default().fg(colors.muted)));
    }
    right.push(Span::styled(format!("{} ", dot), Style::default().fg(dot_color)));
    right.push(Span::styled(format!("{} ", label), Style::default().fg(colors.muted)));
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        right_area,
    );
}
