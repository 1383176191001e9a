use std::sync::{mpsc, Arc};
use std::time::Instant;

use tracing::{info, warn};

use crate::api::ChoreApi;
use crate::board::{refresh, ApplyOutcome, Poller, RefreshResponse, TaskBoard};
use crate::dialogs::{
    CompleteDialogData, ConfirmType, DialogState, HouseholdSelectorData, NewTaskData,
};
use crate::model::{Household, Task, TaskId};
use crate::storage::config::Config;
use crate::theme::Theme;
use crate::ui::components::header::PollStatus;
use crate::ui::components::leaderboard::format_points;
use crate::ui_state::UiState;

/// Which list the cursor is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Queue,
    Fresh,
}

/// Global application state
pub struct App {
    pub should_quit: bool,
    pub board: TaskBoard,
    /// Households the user belongs to, as of the last fetch
    pub households: Vec<Household>,
    pub poller: Poller,
    pub dialogs: DialogState,
    pub ui: UiState,
    pub focus: Pane,
    /// Cursor, by task id so re-ranking does not move it
    pub selected_task: Option<TaskId>,
    pub username: Option<String>,
    pub poll_status: PollStatus,
    api: Arc<dyn ChoreApi>,
    refresh_tx: mpsc::Sender<RefreshResponse>,
    refresh_rx: mpsc::Receiver<RefreshResponse>,
    /// Responses still owed by poll workers
    in_flight: usize,
}

impl App {
    pub fn new(api: Arc<dyn ChoreApi>, config: &Config) -> Self {
        let (refresh_tx, refresh_rx) = mpsc::channel();
        let mut poller = Poller::new(config.poll.interval());
        poller.start();
        Self {
            should_quit: false,
            board: TaskBoard::new(None),
            households: Vec::new(),
            poller,
            dialogs: DialogState::new(),
            ui: UiState::new(Theme::from_name(&config.theme.name)),
            focus: Pane::Queue,
            selected_task: None,
            username: config.session.username.clone(),
            poll_status: PollStatus::Idle,
            api,
            refresh_tx,
            refresh_rx,
            in_flight: 0,
        }
    }

    /// Fetch the household list; with exactly one household, select it
    pub fn load_households(&mut self) {
        match self.api.fetch_households() {
            Ok(households) => {
                self.households = households;
                if self.board.household().is_none() && self.households.len() == 1 {
                    let id = self.households[0].id;
                    self.select_household(id);
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to load households");
                self.ui.show_toast(format!("Could not load households: {}", e));
            }
        }
    }

    pub fn current_household(&self) -> Option<&Household> {
        let id = self.board.household()?;
        self.households.iter().find(|h| h.id == id)
    }

    pub fn select_household(&mut self, id: u64) {
        if self.board.household() == Some(id) {
            return;
        }
        info!(household = id, "switching household");
        self.board.select_household(Some(id));
        self.dialogs.close_all();
        self.selected_task = None;
        self.focus = Pane::Queue;
        self.poller.trigger();
    }

    // ========== Polling ==========

    /// Per-frame housekeeping: expire toasts, start a poll when due
    pub fn tick(&mut self, now: Instant) {
        self.ui.update_toast(now);
        if self.poller.tick(now) {
            let tickets = self.board.issue_all();
            if tickets.is_empty() {
                self.poll_status = PollStatus::Idle;
                self.ensure_selection();
                return;
            }
            self.in_flight += tickets.len();
            refresh::spawn(Arc::clone(&self.api), tickets, self.refresh_tx.clone());
        }
    }

    /// Apply whatever poll responses have arrived, without blocking
    pub fn poll_refresh(&mut self) {
        while let Ok(response) = self.refresh_rx.try_recv() {
            self.handle_response(response);
        }
    }

    fn handle_response(&mut self, response: RefreshResponse) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match self.board.apply(response) {
            ApplyOutcome::Applied => self.poll_status = PollStatus::Live,
            ApplyOutcome::Failed => self.poll_status = PollStatus::Offline,
            ApplyOutcome::Discarded => {}
        }
        self.ensure_selection();
    }

    // ========== Selection ==========

    /// Task ids of the focused pane, in display order
    pub fn current_list(&self) -> Vec<TaskId> {
        let ranked = self.board.ranked();
        let list = match self.focus {
            Pane::Queue => ranked.queue,
            Pane::Fresh => ranked.fresh,
        };
        list.iter().map(|t| t.id).collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_task?;
        self.current_list().iter().position(|t| *t == id)
    }

    pub fn selected(&self) -> Option<&Task> {
        self.selected_index()?;
        self.board.task(self.selected_task?)
    }

    /// Keep the cursor on a task that is still in the focused pane
    pub fn ensure_selection(&mut self) {
        if self.selected_index().is_none() {
            self.selected_task = self.current_list().first().copied();
        }
    }

    pub fn select_next(&mut self) {
        let list = self.current_list();
        if list.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            Some(i) => (i + 1) % list.len(),
            None => 0,
        };
        self.selected_task = Some(list[next]);
    }

    pub fn select_previous(&mut self) {
        let list = self.current_list();
        if list.is_empty() {
            return;
        }
        let prev = match self.selected_index() {
            Some(0) | None => list.len() - 1,
            Some(i) => i - 1,
        };
        self.selected_task = Some(list[prev]);
    }

    pub fn switch_pane(&mut self) {
        self.focus = match self.focus {
            Pane::Queue => Pane::Fresh,
            Pane::Fresh => Pane::Queue,
        };
        self.selected_task = None;
        self.ensure_selection();
    }

    // ========== Household Selector ==========

    pub fn open_household_selector(&mut self) {
        match self.api.fetch_households() {
            Ok(households) => self.households = households,
            Err(e) => {
                warn!(error = %e, "household refresh failed, using cached list");
                self.ui.show_toast("Offline: showing cached households");
            }
        }
        self.dialogs.household_selector = Some(HouseholdSelectorData::new(
            self.households.clone(),
            self.board.household(),
        ));
    }

    pub fn confirm_household_selector(&mut self) {
        let Some(data) = self.dialogs.household_selector.take() else {
            return;
        };
        if let Some(household) = data.selected() {
            let name = household.name.clone();
            self.select_household(household.id);
            self.ui.show_toast(format!("Household: {}", name));
        }
    }

    // ========== Complete Task ==========

    pub fn open_complete_dialog(&mut self) {
        let Some(task) = self.selected() else {
            return;
        };
        let data = CompleteDialogData::new(task, self.board.users(), self.username.as_deref());
        self.dialogs.complete_dialog = Some(data);
    }

    /// Send the work log. Invalid input keeps the dialog open.
    pub fn submit_complete_dialog(&mut self) {
        let Some(data) = self.dialogs.complete_dialog.as_ref() else {
            return;
        };
        let draft = match data.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.ui.show_toast(e.to_string());
                return;
            }
        };
        let task_name = data.task_name.clone();

        match self.api.create_work_log(&draft) {
            Ok(points) => {
                self.dialogs.complete_dialog = None;
                let message = match points {
                    Some(p) => format!("{} done: +{} brownie points", task_name, format_points(p)),
                    None => format!("{} done", task_name),
                };
                info!(task = draft.task, users = ?draft.users, ?points, "work log created");
                self.ui.show_toast(message);
                self.poller.trigger();
            }
            Err(e) => {
                warn!(task = draft.task, error = %e, "work log failed");
                self.ui.show_toast(format!("Could not complete: {}", e));
            }
        }
    }

    // ========== New Task ==========

    pub fn open_new_task_dialog(&mut self) {
        if self.board.household().is_none() {
            self.ui.show_toast("Select a household first");
            return;
        }
        self.dialogs.new_task_dialog = Some(NewTaskData::default());
    }

    pub fn submit_new_task_dialog(&mut self) {
        let Some(data) = self.dialogs.new_task_dialog.as_ref() else {
            return;
        };
        let Some(household) = self.board.household() else {
            self.dialogs.new_task_dialog = None;
            return;
        };
        let draft = match data.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.ui.show_toast(e.to_string());
                return;
            }
        };
        match self.api.create_task(household, &draft) {
            Ok(task) => {
                self.dialogs.new_task_dialog = None;
                info!(task = task.id, household, "task created");
                self.ui.show_toast(format!("Created: {}", task.name));
                self.poller.trigger();
            }
            Err(e) => {
                warn!(household, error = %e, "create task failed");
                self.ui.show_toast(format!("Could not create task: {}", e));
            }
        }
    }

    // ========== Delete / Freeze ==========

    pub fn request_delete(&mut self) {
        if let Some(task) = self.selected() {
            self.dialogs.confirm_dialog = Some(ConfirmType::DeleteTask {
                task: task.id,
                task_name: task.name.clone(),
            });
        }
    }

    pub fn confirm_action(&mut self) {
        let Some(confirm) = self.dialogs.confirm_dialog.take() else {
            return;
        };
        match confirm {
            ConfirmType::DeleteTask { task, task_name } => match self.api.delete_task(task) {
                Ok(()) => {
                    info!(task, "task deleted");
                    self.ui.show_toast(format!("Deleted: {}", task_name));
                    self.poller.trigger();
                }
                Err(e) => {
                    warn!(task, error = %e, "delete failed");
                    self.ui.show_toast(format!("Could not delete: {}", e));
                }
            },
        }
    }

    pub fn cancel_confirm(&mut self) {
        self.dialogs.confirm_dialog = None;
    }

    pub fn toggle_freeze_selected(&mut self) {
        let Some(task) = self.selected() else {
            return;
        };
        let (id, name, frozen) = (task.id, task.name.clone(), task.frozen);
        match self.api.toggle_freeze(id) {
            Ok(()) => {
                let verb = if frozen { "Unfrozen" } else { "Frozen" };
                self.ui.show_toast(format!("{}: {}", verb, name));
                self.poller.trigger();
            }
            Err(e) => {
                warn!(task = id, error = %e, "freeze toggle failed");
                self.ui.show_toast(format!("Could not freeze: {}", e));
            }
        }
    }

    // ========== Misc ==========

    pub fn request_refresh(&mut self) {
        self.poller.trigger();
    }

    pub fn toggle_help(&mut self) {
        self.dialogs.show_help = !self.dialogs.show_help;
    }

    pub fn cycle_theme(&mut self) {
        self.ui.cycle_theme();
        self.ui.show_toast(format!("Theme: {}", self.ui.theme.label()));
    }

    pub fn quit(&mut self) {
        self.poller.stop();
        self.should_quit = true;
    }

    /// Block until every spawned poll response has been applied
    #[cfg(test)]
    pub fn drain_blocking(&mut self) {
        use std::time::Duration;
        while self.in_flight > 0 {
            match self.refresh_rx.recv_timeout(Duration::from_secs(5)) {
                Ok(response) => self.handle_response(response),
                Err(_) => break,
            }
        }
    }
}
