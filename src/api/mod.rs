//! Chore service client
//!
//! `ChoreApi` is the seam between the view model and the REST backend. The
//! poll loop only ever talks to `dyn ChoreApi`, so tests swap in an
//! in-memory fake.

mod http;
#[cfg(test)]
pub mod mock;

pub use http::HttpApi;

use crate::error::Result;
use crate::model::{Household, HouseholdId, Task, TaskDraft, TaskId, User, WorkLogDraft};

/// Operations consumed from the chore service
pub trait ChoreApi: Send + Sync {
    /// Households the current user belongs to
    fn fetch_households(&self) -> Result<Vec<Household>>;

    /// All tasks of a household, frozen ones included
    fn fetch_tasks(&self, household: HouseholdId) -> Result<Vec<Task>>;

    /// Members of a household. `None` when the server reports no user list.
    fn fetch_household_users(&self, household: HouseholdId) -> Result<Option<Vec<User>>>;

    /// Report a completion. Returns the brownie points awarded, if any.
    fn create_work_log(&self, draft: &WorkLogDraft) -> Result<Option<f64>>;

    fn delete_task(&self, task: TaskId) -> Result<()>;

    /// Flip the frozen flag of a task
    fn toggle_freeze(&self, task: TaskId) -> Result<()>;

    fn create_task(&self, household: HouseholdId, draft: &TaskDraft) -> Result<Task>;

    /// Exchange credentials for an API token
    fn login(&self, username: &str, password: &str) -> Result<String>;
}
