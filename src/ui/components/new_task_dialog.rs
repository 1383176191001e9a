//! New Task dialog

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, input_line, render_dialog_frame, render_hint};
use crate::error::{ChoreError, Result};
use crate::model::TaskDraft;
use crate::theme::ThemeColors;

const SECS_PER_DAY: u64 = 24 * 60 * 60;
const MAX_INPUT_LEN: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewTaskField {
    Name,
    Description,
    MinDays,
    MaxDays,
}

#[derive(Debug, Clone)]
pub struct NewTaskData {
    pub name: String,
    pub description: String,
    pub min_days: String,
    pub max_days: String,
    pub field: NewTaskField,
}

impl Default for NewTaskData {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            min_days: "1".to_string(),
            max_days: "7".to_string(),
            field: NewTaskField::Name,
        }
    }
}

impl NewTaskData {
    pub fn next_field(&mut self) {
        self.field = match self.field {
            NewTaskField::Name => NewTaskField::Description,
            NewTaskField::Description => NewTaskField::MinDays,
            NewTaskField::MinDays => NewTaskField::MaxDays,
            NewTaskField::MaxDays => NewTaskField::Name,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            NewTaskField::Name => NewTaskField::MaxDays,
            NewTaskField::Description => NewTaskField::Name,
            NewTaskField::MinDays => NewTaskField::Description,
            NewTaskField::MaxDays => NewTaskField::MinDays,
        };
    }

    fn current_mut(&mut self) -> &mut String {
        match self.field {
            NewTaskField::Name => &mut self.name,
            NewTaskField::Description => &mut self.description,
            NewTaskField::MinDays => &mut self.min_days,
            NewTaskField::MaxDays => &mut self.max_days,
        }
    }

    pub fn input_char(&mut self, c: char) {
        let numeric = matches!(self.field, NewTaskField::MinDays | NewTaskField::MaxDays);
        if numeric && !c.is_ascii_digit() {
            return;
        }
        let value = self.current_mut();
        if value.chars().count() < MAX_INPUT_LEN {
            value.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        self.current_mut().pop();
    }

    /// Build and validate the draft; day counts become seconds
    pub fn to_draft(&self) -> Result<TaskDraft> {
        let parse_days = |value: &str, label: &str| -> Result<u64> {
            value
                .parse::<u64>()
                .map_err(|_| ChoreError::invalid_input(format!("{} must be a number of days", label)))?
                .checked_mul(SECS_PER_DAY)
                .ok_or_else(|| ChoreError::invalid_input(format!("{} is too long", label)))
        };
        let min_interval = parse_days(&self.min_days, "min interval")?;
        let max_interval = parse_days(&self.max_days, "max interval")?;
        let draft = TaskDraft::with_interval(
            self.name.trim(),
            self.description.trim(),
            min_interval,
            max_interval,
        );
        draft.validate()?;
        Ok(draft)
    }
}

pub fn render(frame: &mut Frame, data: &NewTaskData, household_name: &str, colors: &ThemeColors) {
    let area = center_dialog(frame.area(), 60, 11);
    let inner = render_dialog_frame(frame, area, " New Task ", colors.highlight, colors);

    let [target_area, _, name_area, desc_area, min_area, max_area, _, hint_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    let target = Line::from(vec![
        Span::styled("  → ", Style::default().fg(colors.fresh)),
        Span::styled(household_name.to_string(), Style::default().fg(colors.text)),
    ]);
    frame.render_widget(Paragraph::new(target), target_area);

    let rows = [
        (name_area, "Name", &data.name, NewTaskField::Name),
        (desc_area, "Description", &data.description, NewTaskField::Description),
        (min_area, "Min days", &data.min_days, NewTaskField::MinDays),
        (max_area, "Max days", &data.max_days, NewTaskField::MaxDays),
    ];
    for (row_area, label, value, field) in rows {
        frame.render_widget(
            Paragraph::new(input_line(label, value, data.field == field, colors)),
            row_area,
        );
    }

    render_hint(
        frame,
        hint_area,
        &[("Tab", "next field"), ("Enter", "create"), ("Esc", "cancel")],
        colors,
    );
}
