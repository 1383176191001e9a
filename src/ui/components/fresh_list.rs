//! Sidebar with fresh and frozen tasks

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::dialog_utils::truncate;
use crate::model::Task;
use crate::theme::ThemeColors;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[&Task],
    selected_index: Option<usize>,
    focused: bool,
    colors: &ThemeColors,
) {
    let name_width = area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let (icon, icon_color) = if task.frozen {
                ("❄", colors.frozen)
            } else {
                ("✓", colors.fresh)
            };
            let name_style = if task.frozen {
                Style::default().fg(colors.muted)
            } else {
                Style::default().fg(colors.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(icon_color)),
                Span::styled(truncate(&task.name, name_width), name_style),
            ]))
        })
        .collect();

    let border_color = if focused { colors.highlight } else { colors.border };
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Fresh ({}) ", tasks.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("❯");

    let mut state = ListState::default();
    state.select(if focused { selected_index } else { None });
    frame.render_stateful_widget(list, area, &mut state);
}
