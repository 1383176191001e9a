//! Household picker popup

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint, truncate};
use crate::model::{Household, HouseholdId};
use crate::theme::ThemeColors;

const MAX_VISIBLE: usize = 10;

#[derive(Debug, Clone)]
pub struct HouseholdSelectorData {
    pub households: Vec<Household>,
    pub selected_index: usize,
    /// Household active when the picker opened
    pub current: Option<HouseholdId>,
}

impl HouseholdSelectorData {
    pub fn new(households: Vec<Household>, current: Option<HouseholdId>) -> Self {
        let selected_index = current
            .and_then(|id| households.iter().position(|h| h.id == id))
            .unwrap_or(0);
        Self {
            households,
            selected_index,
            current,
        }
    }

    pub fn select_next(&mut self) {
        if !self.households.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.households.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.households.is_empty() {
            self.selected_index = self
                .selected_index
                .checked_sub(1)
                .unwrap_or(self.households.len() - 1);
        }
    }

    pub fn selected(&self) -> Option<&Household> {
        self.households.get(self.selected_index)
    }
}

pub fn render(frame: &mut Frame, data: &HouseholdSelectorData, colors: &ThemeColors) {
    let visible = data.households.len().clamp(1, MAX_VISIBLE);
    let area = center_dialog(frame.area(), 44, visible as u16 + 5);
    let inner = render_dialog_frame(frame, area, " Households ", colors.highlight, colors);

    let [list_area, _, hint_area] = Layout::vertical([
        Constraint::Length(visible as u16 + 1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let lines: Vec<Line> = if data.households.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "  You are not in any household",
                Style::default().fg(colors.muted),
            )),
        ]
    } else {
        let start = data.selected_index.saturating_sub(visible - 1);
        std::iter::once(Line::from(""))
            .chain(
                data.households
                    .iter()
                    .enumerate()
                    .skip(start)
                    .take(visible)
                    .map(|(i, h)| {
                        let is_selected = i == data.selected_index;
                        let marker = if data.current == Some(h.id) { "●" } else { " " };
                        let style = if is_selected {
                            Style::default()
                                .fg(colors.highlight)
                                .bg(colors.bg_secondary)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(colors.text)
                        };
                        Line::from(vec![
                            Span::styled(format!("  {} ", marker), Style::default().fg(colors.fresh)),
                            Span::styled(truncate(&h.name, 36), style),
                        ])
                    }),
            )
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), list_area);

    render_hint(
        frame,
        hint_area,
        &[("j/k", "move"), ("Enter", "select"), ("Esc", "cancel")],
        colors,
    );
}
