//! Task board view model
//!
//! Caches the tasks and users of the selected household and re-derives the
//! display order from that cache on demand. Refreshes are best-effort: a
//! failed fetch is logged and leaves the previous cache in place.

pub mod poller;
pub mod ranking;
pub mod refresh;

use tracing::{debug, warn};

use crate::api::ChoreApi;
use crate::model::{HouseholdId, Task, TaskId, User};

pub use poller::Poller;
pub use ranking::{rank_for_queue, top_scorers, RankedTasks};
pub use refresh::{ApplyOutcome, Fetched, RefreshKind, RefreshResponse, RefreshTicket};

#[derive(Debug, Default)]
pub struct TaskBoard {
    household: Option<HouseholdId>,
    tasks: Vec<Task>,
    users: Vec<User>,
    /// Bumped on every household switch
    generation: u64,
    next_seq: u64,
    applied_tasks_seq: u64,
    applied_users_seq: u64,
    /// Set once any tasks response has been applied for this selection
    loaded: bool,
}

impl TaskBoard {
    pub fn new(household: Option<HouseholdId>) -> Self {
        Self {
            household,
            ..Self::default()
        }
    }

    pub fn household(&self) -> Option<HouseholdId> {
        self.household
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Whether the task list has been fetched at least once since selection
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Switch household. Clears both caches and invalidates in-flight fetches.
    pub fn select_household(&mut self, household: Option<HouseholdId>) {
        if self.household == household {
            return;
        }
        debug!(?household, "household selected");
        self.household = household;
        self.generation += 1;
        self.applied_tasks_seq = 0;
        self.applied_users_seq = 0;
        self.loaded = false;
        self.tasks.clear();
        self.users.clear();
    }

    /// Queue and sidebar in display order
    pub fn ranked(&self) -> RankedTasks<'_> {
        rank_for_queue(&self.tasks)
    }

    /// Leaderboard for the selected household
    pub fn top_scorers(&self, n: usize) -> Vec<&User> {
        match self.household {
            Some(h) => top_scorers(&self.users, h, n),
            None => Vec::new(),
        }
    }

    /// Ticket for a fetch against the current selection.
    ///
    /// With nothing selected there is nothing to fetch: the matching cache
    /// is emptied and `None` returned.
    pub fn issue(&mut self, kind: RefreshKind) -> Option<RefreshTicket> {
        let Some(household) = self.household else {
            match kind {
                RefreshKind::Tasks => self.tasks.clear(),
                RefreshKind::Users => self.users.clear(),
            }
            return None;
        };
        self.next_seq += 1;
        Some(RefreshTicket {
            kind,
            household,
            generation: self.generation,
            seq: self.next_seq,
        })
    }

    /// Tickets for a full poll cycle
    pub fn issue_all(&mut self) -> Vec<RefreshTicket> {
        [RefreshKind::Tasks, RefreshKind::Users]
            .into_iter()
            .filter_map(|kind| self.issue(kind))
            .collect()
    }

    /// Fold a completed fetch into the cache
    pub fn apply(&mut self, response: RefreshResponse) -> ApplyOutcome {
        let ticket = response.ticket;
        if Some(ticket.household) != self.household || ticket.generation != self.generation {
            debug!(?ticket, "dropping response for previous selection");
            return ApplyOutcome::Discarded;
        }
        let applied_seq = match ticket.kind {
            RefreshKind::Tasks => self.applied_tasks_seq,
            RefreshKind::Users => self.applied_users_seq,
        };
        if ticket.seq < applied_seq {
            debug!(?ticket, applied_seq, "dropping out-of-order response");
            return ApplyOutcome::Discarded;
        }

        match response.result {
            Err(e) => {
                warn!(kind = ?ticket.kind, household = ticket.household, error = %e, "refresh failed, keeping cached data");
                ApplyOutcome::Failed
            }
            Ok(Fetched::Tasks(mut tasks)) => {
                // stable, so server order survives among equal times
                tasks.sort_by(|a, b| a.mean_completion_time.total_cmp(&b.mean_completion_time));
                self.tasks = tasks;
                self.applied_tasks_seq = ticket.seq;
                self.loaded = true;
                ApplyOutcome::Applied
            }
            Ok(Fetched::Users(users)) => {
                self.users = users.unwrap_or_default();
                self.applied_users_seq = ticket.seq;
                ApplyOutcome::Applied
            }
        }
    }

    /// Synchronously refresh the task cache
    pub fn refresh_tasks(&mut self, api: &dyn ChoreApi) -> ApplyOutcome {
        self.refresh(api, RefreshKind::Tasks)
    }

    /// Synchronously refresh the user cache
    pub fn refresh_users(&mut self, api: &dyn ChoreApi) -> ApplyOutcome {
        self.refresh(api, RefreshKind::Users)
    }

    fn refresh(&mut self, api: &dyn ChoreApi, kind: RefreshKind) -> ApplyOutcome {
        match self.issue(kind) {
            Some(ticket) => self.apply(refresh::fetch(api, ticket)),
            None => ApplyOutcome::Applied,
        }
    }
}
