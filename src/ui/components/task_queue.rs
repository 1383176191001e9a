use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::{format_duration, format_relative_time, Task};
use crate::theme::ThemeColors;

const GAUGE_WIDTH: usize = 10;

/// Staleness as a fixed-width bar, clamped to [0, 1]
pub fn staleness_gauge(staleness: f64) -> String {
    let ratio = if staleness.is_nan() {
        0.0
    } else {
        staleness.clamp(0.0, 1.0)
    };
    let filled = (ratio * GAUGE_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(GAUGE_WIDTH - filled))
}

/// Last-done column text
pub fn last_done(task: &Task, now: DateTime<Utc>) -> String {
    task.last_completed
        .map(|dt| format_relative_time(dt, now))
        .unwrap_or_else(|| "never".to_string())
}

/// Ranked queue table
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[&Task],
    selected_index: Option<usize>,
    focused: bool,
    now: DateTime<Utc>,
    colors: &ThemeColors,
) {
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("STALENESS"),
        Cell::from("TASK"),
        Cell::from("TAKES"),
        Cell::from("LAST DONE"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = focused && selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };
            let band_color = colors.band(task.band());

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(Line::from(vec![
                    Span::styled(staleness_gauge(task.staleness), Style::default().fg(band_color)),
                    Span::styled(
                        format!(" {:>3.0}%", task.staleness.clamp(0.0, 1.0) * 100.0),
                        Style::default().fg(colors.muted),
                    ),
                ])),
                Cell::from(task.name.clone()).style(Style::default().fg(colors.text)),
                Cell::from(format_duration(task.mean_completion_time))
                    .style(Style::default().fg(colors.muted)),
                Cell::from(last_done(task, now)).style(Style::default().fg(colors.muted)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(GAUGE_WIDTH as u16 + 5),
        Constraint::Fill(3),
        Constraint::Length(10),
        Constraint::Length(14),
    ];

    let border_color = if focused { colors.highlight } else { colors.border };
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Queue ({}) ", tasks.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    let mut table_state = TableState::default();
    table_state.select(if focused { selected_index } else { None });

    frame.render_stateful_widget(table, area, &mut table_state);
}
