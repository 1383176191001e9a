//! In-memory chore service for tests

use std::collections::HashMap;
use std::sync::Mutex;

use super::ChoreApi;
use crate::error::{ChoreError, Result};
use crate::model::task::TaskSchedule;
use crate::model::{Household, HouseholdId, Task, TaskDraft, TaskId, User, WorkLogDraft};

#[derive(Default)]
struct State {
    households: Vec<Household>,
    tasks: HashMap<HouseholdId, Vec<Task>>,
    users: HashMap<HouseholdId, Vec<User>>,
    work_logs: Vec<WorkLogDraft>,
    fail_reads: bool,
    fail_writes: bool,
    next_id: TaskId,
}

/// Fake backend with switchable failures
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<State>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 1000,
                ..State::default()
            }),
        }
    }

    pub fn with_household(self, id: HouseholdId, name: &str) -> Self {
        self.state.lock().unwrap().households.push(Household {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn set_tasks(&self, household: HouseholdId, tasks: Vec<Task>) {
        self.state.lock().unwrap().tasks.insert(household, tasks);
    }

    pub fn set_users(&self, household: HouseholdId, users: Vec<User>) {
        self.state.lock().unwrap().users.insert(household, users);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }

    pub fn work_logs(&self) -> Vec<WorkLogDraft> {
        self.state.lock().unwrap().work_logs.clone()
    }

    pub fn find_task(&self, id: TaskId) -> Option<Task> {
        let state = self.state.lock().unwrap();
        state
            .tasks
            .values()
            .flat_map(|tasks| tasks.iter())
            .find(|t| t.id == id)
            .cloned()
    }

    fn check_read(state: &State) -> Result<()> {
        if state.fail_reads {
            Err(ChoreError::transport("simulated network error"))
        } else {
            Ok(())
        }
    }

    fn check_write(state: &State) -> Result<()> {
        if state.fail_writes {
            Err(ChoreError::status(500, "simulated server error"))
        } else {
            Ok(())
        }
    }
}

impl ChoreApi for FakeApi {
    fn fetch_households(&self) -> Result<Vec<Household>> {
        let state = self.state.lock().unwrap();
        Self::check_read(&state)?;
        Ok(state.households.clone())
    }

    fn fetch_tasks(&self, household: HouseholdId) -> Result<Vec<Task>> {
        let state = self.state.lock().unwrap();
        Self::check_read(&state)?;
        Ok(state.tasks.get(&household).cloned().unwrap_or_default())
    }

    fn fetch_household_users(&self, household: HouseholdId) -> Result<Option<Vec<User>>> {
        let state = self.state.lock().unwrap();
        Self::check_read(&state)?;
        Ok(state.users.get(&household).cloned())
    }

    fn create_work_log(&self, draft: &WorkLogDraft) -> Result<Option<f64>> {
        let mut state = self.state.lock().unwrap();
        Self::check_write(&state)?;
        state.work_logs.push(draft.clone());
        Ok(Some(draft.completion_time as f64 / 60.0))
    }

    fn delete_task(&self, task: TaskId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        Self::check_write(&state)?;
        for tasks in state.tasks.values_mut() {
            tasks.retain(|t| t.id != task);
        }
        Ok(())
    }

    fn toggle_freeze(&self, task: TaskId) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        Self::check_write(&state)?;
        let found = state
            .tasks
            .values_mut()
            .flat_map(|tasks| tasks.iter_mut())
            .find(|t| t.id == task)
            .ok_or_else(|| ChoreError::status(404, "task not found"))?;
        found.frozen = !found.frozen;
        Ok(())
    }

    fn create_task(&self, household: HouseholdId, draft: &TaskDraft) -> Result<Task> {
        let mut state = self.state.lock().unwrap();
        Self::check_write(&state)?;
        state.next_id += 1;
        let (min_interval, max_interval, schedule) = match &draft.schedule {
            TaskSchedule::Interval {
                min_interval,
                max_interval,
            } => (Some(*min_interval), Some(*max_interval), None),
            TaskSchedule::Cron { schedule } => (None, None, Some(schedule.clone())),
        };
        let task = Task {
            id: state.next_id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            staleness: 0.0,
            mean_completion_time: 0.0,
            max_interval,
            min_interval,
            schedule,
            frozen: false,
            last_completed: None,
        };
        state.tasks.entry(household).or_default().push(task.clone());
        Ok(task)
    }

    fn login(&self, username: &str, password: &str) -> Result<String> {
        if password.is_empty() {
            return Err(ChoreError::status(401, "invalid credentials"));
        }
        Ok(format!("token-{}", username))
    }
}

/// Task fixture with the fields ranking cares about
pub fn task(id: TaskId, staleness: f64, mean_completion_time: f64) -> Task {
    Task {
        id,
        name: format!("task-{}", id),
        description: String::new(),
        staleness,
        mean_completion_time,
        max_interval: None,
        min_interval: None,
        schedule: None,
        frozen: false,
        last_completed: None,
    }
}

/// User fixture with a single household ledger entry
pub fn user(id: u64, household: HouseholdId, credit: f64, debit: f64) -> User {
    User {
        id,
        username: format!("user-{}", id),
        brownie_point_credit: HashMap::from([(household, credit)]),
        brownie_point_debit: HashMap::from([(household, debit)]),
        rolling_brownie_points: None,
    }
}
