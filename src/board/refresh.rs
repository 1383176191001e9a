//! Refresh tickets and background fetching
//!
//! Every fetch is tagged with the household, the selection generation and a
//! sequence number at issue time. [`super::TaskBoard::apply`] uses the tag to
//! drop responses that arrive after the selection moved on or after a newer
//! response was already applied.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use tracing::warn;

use crate::api::ChoreApi;
use crate::error::Result;
use crate::model::{HouseholdId, Task, User};

/// Which cache a ticket refreshes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    Tasks,
    Users,
}

/// Identity of one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub kind: RefreshKind,
    pub household: HouseholdId,
    pub generation: u64,
    pub seq: u64,
}

/// Payload of a successful fetch
#[derive(Debug)]
pub enum Fetched {
    Tasks(Vec<Task>),
    /// `None` when the server returned no user list
    Users(Option<Vec<User>>),
}

/// A completed fetch, successful or not
#[derive(Debug)]
pub struct RefreshResponse {
    pub ticket: RefreshTicket,
    pub result: Result<Fetched>,
}

/// What `apply` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Cache replaced
    Applied,
    /// Response no longer relevant, cache untouched
    Discarded,
    /// Fetch failed, cache untouched
    Failed,
}

/// Run the fetch a ticket describes
pub fn fetch(api: &dyn ChoreApi, ticket: RefreshTicket) -> RefreshResponse {
    let result = match ticket.kind {
        RefreshKind::Tasks => api.fetch_tasks(ticket.household).map(Fetched::Tasks),
        RefreshKind::Users => api
            .fetch_household_users(ticket.household)
            .map(Fetched::Users),
    };
    RefreshResponse { ticket, result }
}

/// Fetch a batch of tickets on a worker thread.
///
/// Responses are sent in ticket order. A closed receiver just ends the
/// worker early.
pub fn spawn(
    api: Arc<dyn ChoreApi>,
    tickets: Vec<RefreshTicket>,
    tx: mpsc::Sender<RefreshResponse>,
) {
    if tickets.is_empty() {
        return;
    }
    let spawned = thread::Builder::new()
        .name("choreboard-poll".to_string())
        .spawn(move || {
            for ticket in tickets {
                if tx.send(fetch(api.as_ref(), ticket)).is_err() {
                    break;
                }
            }
        });
    if let Err(e) = spawned {
        warn!(error = %e, "failed to spawn poll worker");
    }
}
