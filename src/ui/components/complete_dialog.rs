//! Task completion dialog
//!
//! Picks who did the task (credit is split between everyone ticked), how
//! long it took and how gross it was.

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{
    center_dialog, checkbox_line, input_line, render_dialog_frame, render_hint, truncate,
};
use crate::error::{ChoreError, Result};
use crate::model::{Task, TaskId, User, UserId, WorkLogDraft, MAX_GROSSNESS};
use crate::theme::ThemeColors;

const DIALOG_WIDTH: u16 = 56;
const MAX_VISIBLE_USERS: usize = 8;
const DEFAULT_GROSSNESS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteField {
    Users,
    Minutes,
    Grossness,
}

#[derive(Debug, Clone)]
pub struct CompleteDialogData {
    pub task: TaskId,
    pub task_name: String,
    pub users: Vec<(UserId, String)>,
    pub checked: Vec<bool>,
    pub cursor: usize,
    pub minutes: String,
    pub grossness: u8,
    pub field: CompleteField,
}

impl CompleteDialogData {
    /// Prefills minutes from the task's mean time and ticks `me` if present
    pub fn new(task: &Task, users: &[User], me: Option<&str>) -> Self {
        let users: Vec<(UserId, String)> = users
            .iter()
            .map(|u| (u.id, u.username.clone()))
            .collect();
        let checked = users
            .iter()
            .map(|(_, name)| me.is_some_and(|m| m == name))
            .collect();
        let minutes = (task.mean_completion_time / 60.0).round().max(1.0) as u64;
        Self {
            task: task.id,
            task_name: task.name.clone(),
            users,
            checked,
            cursor: 0,
            minutes: minutes.to_string(),
            grossness: DEFAULT_GROSSNESS,
            field: CompleteField::Users,
        }
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            CompleteField::Users => CompleteField::Minutes,
            CompleteField::Minutes => CompleteField::Grossness,
            CompleteField::Grossness => CompleteField::Users,
        };
    }

    pub fn cursor_down(&mut self) {
        if !self.users.is_empty() {
            self.cursor = (self.cursor + 1) % self.users.len();
        }
    }

    pub fn cursor_up(&mut self) {
        if !self.users.is_empty() {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(self.users.len() - 1);
        }
    }

    pub fn toggle_current(&mut self) {
        if let Some(c) = self.checked.get_mut(self.cursor) {
            *c = !*c;
        }
    }

    /// Digits only, into the minutes field
    pub fn input_char(&mut self, c: char) {
        if self.field == CompleteField::Minutes && c.is_ascii_digit() && self.minutes.len() < 5 {
            self.minutes.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if self.field == CompleteField::Minutes {
            self.minutes.pop();
        }
    }

    pub fn adjust_grossness(&mut self, delta: i8) {
        let value = self.grossness as i16 + delta as i16;
        self.grossness = value.clamp(0, MAX_GROSSNESS as i16) as u8;
    }

    pub fn selected_users(&self) -> Vec<UserId> {
        self.users
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|((id, _), _)| *id)
            .collect()
    }

    /// Build and validate the work log
    pub fn to_draft(&self) -> Result<WorkLogDraft> {
        let minutes: u64 = self
            .minutes
            .parse()
            .map_err(|_| ChoreError::invalid_input("minutes must be a number"))?;
        let draft = WorkLogDraft {
            task: self.task,
            users: self.selected_users(),
            completion_time: minutes * 60,
            grossness: self.grossness,
        };
        draft.validate()?;
        Ok(draft)
    }
}

pub fn render(frame: &mut Frame, data: &CompleteDialogData, colors: &ThemeColors) {
    let visible_users = data.users.len().clamp(1, MAX_VISIBLE_USERS);
    // title row, user rows, blank, minutes, grossness, blank, hint, borders
    let height = (visible_users + 8) as u16;
    let area = center_dialog(frame.area(), DIALOG_WIDTH, height);
    let inner = render_dialog_frame(frame, area, " Complete Task ", colors.highlight, colors);

    let [title_area, users_area, _, minutes_area, gross_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(visible_users as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let title = Line::from(vec![
        Span::styled("  Task: ", Style::default().fg(colors.muted)),
        Span::styled(
            truncate(&data.task_name, DIALOG_WIDTH as usize - 12),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), title_area);

    let user_lines: Vec<Line> = if data.users.is_empty() {
        vec![Line::from(Span::styled(
            "   (no users loaded yet)",
            Style::default().fg(colors.muted),
        ))]
    } else {
        // keep the cursor in view
        let start = data.cursor.saturating_sub(visible_users - 1);
        data.users
            .iter()
            .zip(&data.checked)
            .enumerate()
            .skip(start)
            .take(visible_users)
            .map(|(i, ((_, name), checked))| {
                let under_cursor = data.field == CompleteField::Users && i == data.cursor;
                checkbox_line(name, *checked, under_cursor, colors)
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(user_lines), users_area);

    frame.render_widget(
        Paragraph::new(input_line(
            "Minutes",
            &data.minutes,
            data.field == CompleteField::Minutes,
            colors,
        )),
        minutes_area,
    );

    let gross_focused = data.field == CompleteField::Grossness;
    let bar: String = (0..MAX_GROSSNESS)
        .map(|i| if i < data.grossness { '■' } else { '·' })
        .collect();
    let gross_line = Line::from(vec![
        Span::styled(
            format!("  {:<12}", "Grossness"),
            if gross_focused {
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.muted)
            },
        ),
        Span::styled(bar, Style::default().fg(colors.warning)),
        Span::styled(
            format!(" {}/{}", data.grossness, MAX_GROSSNESS),
            Style::default().fg(colors.text),
        ),
    ]);
    frame.render_widget(Paragraph::new(gross_line), gross_area);

    let hints: &[(&str, &str)] = match data.field {
        CompleteField::Users => &[("Space", "toggle"), ("Tab", "next"), ("Enter", "submit"), ("Esc", "cancel")],
        CompleteField::Minutes => &[("0-9", "minutes"), ("Tab", "next"), ("Enter", "submit"), ("Esc", "cancel")],
        CompleteField::Grossness => &[("←/→", "adjust"), ("Tab", "next"), ("Enter", "submit"), ("Esc", "cancel")],
    };
    render_hint(frame, hint_area, hints, colors);
}
