//! Confirmation dialog

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use crate::model::TaskId;
use crate::theme::ThemeColors;

/// Actions that need a yes/no before they run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmType {
    /// Permanently delete a task
    DeleteTask { task: TaskId, task_name: String },
}

impl ConfirmType {
    pub fn title(&self) -> &str {
        match self {
            ConfirmType::DeleteTask { .. } => " Delete ",
        }
    }

    pub fn message(&self) -> Vec<Line<'static>> {
        match self {
            ConfirmType::DeleteTask { task_name, .. } => vec![
                Line::from(format!("Task: {}", task_name)),
                Line::from(""),
                Line::from("This removes the task and its history"),
                Line::from("for everyone in the household."),
            ],
        }
    }
}

pub fn render(frame: &mut Frame, confirm: &ConfirmType, colors: &ThemeColors) {
    let message = confirm.message();
    let area = center_dialog(frame.area(), 48, message.len() as u16 + 5);
    let inner = render_dialog_frame(frame, area, confirm.title(), colors.error, colors);

    let [_, message_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(message.len() as u16),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        message_area,
    );
    render_hint(frame, hint_area, &[("y", "confirm"), ("n/Esc", "cancel")], colors);
}
