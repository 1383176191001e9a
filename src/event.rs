use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;
use crate::ui::components::complete_dialog::CompleteField;

/// Handle at most one terminal event. Returns false once the app should exit.
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Popups take input ahead of the board
    if app.dialogs.show_help {
        handle_help_key(app, key);
        return;
    }

    if app.dialogs.confirm_dialog.is_some() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    if app.dialogs.complete_dialog.is_some() {
        handle_complete_dialog_key(app, key);
        return;
    }

    if app.dialogs.new_task_dialog.is_some() {
        handle_new_task_dialog_key(app, key);
        return;
    }

    if app.dialogs.household_selector.is_some() {
        handle_household_selector_key(app, key);
        return;
    }

    handle_board_key(app, key);
}

fn handle_board_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),

        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Tab => app.switch_pane(),

        KeyCode::Char('h') => app.open_household_selector(),
        KeyCode::Char('c') | KeyCode::Enter => app.open_complete_dialog(),
        KeyCode::Char('n') => app.open_new_task_dialog(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('f') => app.toggle_freeze_selected(),

        KeyCode::Char('r') | KeyCode::Char('R') => app.request_refresh(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
    ) {
        app.dialogs.show_help = false;
    }
}

fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_action(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_confirm(),
        _ => {}
    }
}

fn handle_household_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.confirm_household_selector(),
        KeyCode::Esc | KeyCode::Char('q') => app.dialogs.household_selector = None,
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(data) = app.dialogs.household_selector.as_mut() {
                data.select_next();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(data) = app.dialogs.household_selector.as_mut() {
                data.select_prev();
            }
        }
        _ => {}
    }
}

fn handle_complete_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_complete_dialog();
            return;
        }
        KeyCode::Esc => {
            app.dialogs.complete_dialog = None;
            return;
        }
        _ => {}
    }

    let Some(data) = app.dialogs.complete_dialog.as_mut() else {
        return;
    };
    match (data.field, key.code) {
        (_, KeyCode::Tab) => data.next_field(),
        (CompleteField::Users, KeyCode::Char('j') | KeyCode::Down) => data.cursor_down(),
        (CompleteField::Users, KeyCode::Char('k') | KeyCode::Up) => data.cursor_up(),
        (CompleteField::Users, KeyCode::Char(' ')) => data.toggle_current(),
        (CompleteField::Minutes, KeyCode::Backspace) => data.delete_char(),
        (CompleteField::Minutes, KeyCode::Char(c)) => data.input_char(c),
        (CompleteField::Grossness, KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+')) => {
            data.adjust_grossness(1)
        }
        (CompleteField::Grossness, KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-')) => {
            data.adjust_grossness(-1)
        }
        _ => {}
    }
}

fn handle_new_task_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_new_task_dialog(),
        KeyCode::Esc => app.dialogs.new_task_dialog = None,
        _ => {
            let Some(data) = app.dialogs.new_task_dialog.as_mut() else {
                return;
            };
            match key.code {
                KeyCode::Tab | KeyCode::Down => data.next_field(),
                KeyCode::BackTab | KeyCode::Up => data.prev_field(),
                KeyCode::Backspace => data.delete_char(),
                KeyCode::Char(c) => data.input_char(c),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    use crate::api::mock::{task, user, FakeApi};
    use crate::app::Pane;
    use crate::storage::config::Config;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn loaded_app() -> (Arc<FakeApi>, App) {
        let api = Arc::new(FakeApi::new().with_household(1, "Flat"));
        api.set_tasks(1, vec![task(1, 0.5, 600.0), task(2, 1.0, 300.0), task(3, 0.0, 60.0)]);
        api.set_users(1, vec![user(1, 1, 4.0, 0.0), user(2, 1, 2.0, 0.0)]);
        let mut app = App::new(api.clone(), &Config::default());
        app.load_households();
        app.poller.trigger();
        app.tick(Instant::now());
        app.drain_blocking();
        (api, app)
    }

    #[test]
    fn test_quit_keys() {
        let (_, mut app) = loaded_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let (_, mut app) = loaded_app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_keys() {
        let (_, mut app) = loaded_app();
        assert_eq!(app.selected_task, Some(2));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_task, Some(1));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Pane::Fresh);
        assert_eq!(app.selected_task, Some(3));
    }

    #[test]
    fn test_help_swallows_board_keys() {
        let (_, mut app) = loaded_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.dialogs.show_help);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_task, Some(2));
        press(&mut app, KeyCode::Esc);
        assert!(!app.dialogs.show_help);
    }

    #[test]
    fn test_complete_flow_from_keys() {
        let (api, mut app) = loaded_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.dialogs.complete_dialog.is_some());

        // tick the first user, set 12 minutes, raise grossness twice
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Tab);
        let start = app.dialogs.complete_dialog.as_ref().unwrap().grossness;
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert!(app.dialogs.complete_dialog.is_none());
        let logs = api.work_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].task, 2);
        assert_eq!(logs[0].users, vec![1]);
        assert_eq!(logs[0].completion_time, 12 * 60);
        assert_eq!(logs[0].grossness, start + 2);
    }

    #[test]
    fn test_complete_without_users_stays_open() {
        let (api, mut app) = loaded_app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);
        assert!(app.dialogs.complete_dialog.is_some());
        assert!(api.work_logs().is_empty());
        press(&mut app, KeyCode::Esc);
        assert!(app.dialogs.complete_dialog.is_none());
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let (api, mut app) = loaded_app();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.dialogs.confirm_dialog.is_none());
        assert!(api.find_task(2).is_some());

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(api.find_task(2).is_none());
    }

    #[test]
    fn test_new_task_dialog_typing() {
        let (api, mut app) = loaded_app();
        press(&mut app, KeyCode::Char('n'));
        // 'q' is text here, not quit
        for c in "quiet hours".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Enter);
        assert!(app.dialogs.new_task_dialog.is_none());
        assert_eq!(api.find_task(1001).unwrap().name, "quiet hours");
    }

    #[test]
    fn test_freeze_key() {
        let (api, mut app) = loaded_app();
        press(&mut app, KeyCode::Char('f'));
        assert!(api.find_task(2).unwrap().frozen);
    }
}
