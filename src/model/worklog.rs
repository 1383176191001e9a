use serde::{Deserialize, Serialize};

use super::{TaskId, UserId};
use crate::error::{ChoreError, Result};

/// Upper bound of the grossness rating
pub const MAX_GROSSNESS: u8 = 10;

/// A task completion to report. Credit is split between all `users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkLogDraft {
    pub task: TaskId,
    pub users: Vec<UserId>,
    /// Time spent, in seconds
    pub completion_time: u64,
    pub grossness: u8,
}

impl WorkLogDraft {
    pub fn validate(&self) -> Result<()> {
        if self.users.is_empty() {
            return Err(ChoreError::invalid_input("select at least one user"));
        }
        let mut seen = self.users.clone();
        seen.sort_unstable();
        seen.dedup();
        if seen.len() != self.users.len() {
            return Err(ChoreError::invalid_input("a user can only be credited once"));
        }
        if self.completion_time == 0 {
            return Err(ChoreError::invalid_input("completion time must be positive"));
        }
        if self.grossness > MAX_GROSSNESS {
            return Err(ChoreError::invalid_input(format!(
                "grossness must be between 0 and {}",
                MAX_GROSSNESS
            )));
        }
        Ok(())
    }
}

/// Server reply to a work log
#[derive(Debug, Clone, Deserialize)]
pub struct WorkLogReceipt {
    #[serde(default)]
    pub brownie_points: Option<f64>,
}
