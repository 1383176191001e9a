use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// What the main area shows when there is no queue to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    NoHousehold,
    Loading,
    /// Loaded, but nothing is stale
    AllFresh,
}

pub fn render(frame: &mut Frame, area: Rect, kind: EmptyKind, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Queue ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (title, hint) = match kind {
        EmptyKind::NoHousehold => ("No household selected", "Press h to pick one"),
        EmptyKind::Loading => ("Loading tasks…", ""),
        EmptyKind::AllFresh => ("Nothing to do", "Every task is fresh. Press n to add one"),
    };

    let [_, text_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint, Style::default().fg(colors.muted))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
}
