pub mod household;
pub mod task;
pub mod user;
pub mod worklog;

pub use household::{Household, HouseholdId};
pub use task::{format_duration, format_relative_time, StalenessBand, Task, TaskDraft, TaskId};
pub use user::{User, UserId};
pub use worklog::{WorkLogDraft, WorkLogReceipt, MAX_GROSSNESS};
