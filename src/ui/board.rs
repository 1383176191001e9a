//! Main board screen

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, Pane};

use super::components::{
    complete_dialog, confirm_dialog, empty_state, footer, fresh_list, header, help_panel,
    household_selector, leaderboard, new_task_dialog, task_queue, toast,
};
use empty_state::EmptyKind;

const SIDEBAR_WIDTH: u16 = 34;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.ui.colors;

    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let household = app.current_household();
    header::render(
        frame,
        header_area,
        household.map(|h| h.name.as_str()),
        app.username.as_deref(),
        app.poll_status,
        colors,
    );

    render_body(frame, app, body_area);

    footer::render(
        frame,
        footer_area,
        app.board.household().is_some(),
        app.selected().is_some(),
        colors,
    );

    render_overlays(frame, app);
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.ui.colors;
    let [main_area, side_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(SIDEBAR_WIDTH)]).areas(area);
    let [fresh_area, board_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(leaderboard::LEADERBOARD_SIZE as u16 + 2),
    ])
    .areas(side_area);

    let ranked = app.board.ranked();
    let selected = app.selected_index();

    let empty = if app.board.household().is_none() {
        Some(EmptyKind::NoHousehold)
    } else if !app.board.is_loaded() {
        Some(EmptyKind::Loading)
    } else if ranked.queue.is_empty() {
        Some(EmptyKind::AllFresh)
    } else {
        None
    };
    match empty {
        Some(kind) => empty_state::render(frame, main_area, kind, colors),
        None => task_queue::render(
            frame,
            main_area,
            &ranked.queue,
            selected,
            app.focus == Pane::Queue,
            Utc::now(),
            colors,
        ),
    }

    fresh_list::render(
        frame,
        fresh_area,
        &ranked.fresh,
        selected,
        app.focus == Pane::Fresh,
        colors,
    );

    leaderboard::render(
        frame,
        board_area,
        &app.board.top_scorers(leaderboard::LEADERBOARD_SIZE),
        app.board.household(),
        app.username.as_deref(),
        colors,
    );
}

fn render_overlays(frame: &mut Frame, app: &App) {
    let colors = &app.ui.colors;
    if app.dialogs.has_active_dialog() {
        render_dialogs(frame, app);
    }

    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, colors);
        }
    }
}

fn render_dialogs(frame: &mut Frame, app: &App) {
    let colors = &app.ui.colors;

    if let Some(ref data) = app.dialogs.household_selector {
        household_selector::render(frame, data, colors);
    }

    if let Some(ref data) = app.dialogs.complete_dialog {
        complete_dialog::render(frame, data, colors);
    }

    if let Some(ref data) = app.dialogs.new_task_dialog {
        let name = app
            .current_household()
            .map(|h| h.name.as_str())
            .unwrap_or("");
        new_task_dialog::render(frame, data, name, colors);
    }

    if let Some(ref confirm) = app.dialogs.confirm_dialog {
        confirm_dialog::render(frame, confirm, colors);
    }

    if app.dialogs.show_help {
        help_panel::render(frame, colors);
    }
}
