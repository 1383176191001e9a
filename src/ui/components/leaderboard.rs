//! Brownie point leaderboard

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::model::{HouseholdId, User};
use crate::theme::ThemeColors;

/// Rows shown on the main screen
pub const LEADERBOARD_SIZE: usize = 5;

/// Points with one decimal, trailing ".0" dropped
pub fn format_points(points: f64) -> String {
    // adding 0.0 folds -0.0 into 0.0
    let rounded = (points * 10.0).round() / 10.0 + 0.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    users: &[&User],
    household: Option<HouseholdId>,
    me: Option<&str>,
    colors: &ThemeColors,
) {
    let show_rolling = users.iter().any(|u| u.rolling_brownie_points.is_some());

    let rows: Vec<Row> = users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let score = household.map(|h| user.score(h)).unwrap_or(0.0);
            let rolling = user
                .rolling_brownie_points
                .map(format_points)
                .unwrap_or_else(|| "—".to_string());
            let is_me = me.is_some_and(|m| m == user.username);
            let name_style = if is_me {
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            let mut cells = vec![
                Cell::from(format!("{}.", i + 1)).style(Style::default().fg(colors.muted)),
                Cell::from(user.username.clone()).style(name_style),
                Cell::from(format_points(score)).style(Style::default().fg(colors.text)),
            ];
            if show_rolling {
                cells.push(Cell::from(rolling).style(Style::default().fg(colors.muted)));
            }
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(7),
    ];
    if show_rolling {
        widths.push(Constraint::Length(7));
    }

    let table = Table::new(rows, widths).block(
        Block::default()
            .title(" Brownie Points ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(8.0), "8");
        assert_eq!(format_points(7.25), "7.3");
        assert_eq!(format_points(-2.0), "-2");
        assert_eq!(format_points(0.04), "0");
        assert_eq!(format_points(-0.04), "0");
    }
}
