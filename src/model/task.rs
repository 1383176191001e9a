use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChoreError, Result};

/// Task identifier as issued by the chore service
pub type TaskId = u64;

/// A household chore as reported by the chore service.
///
/// The client holds a read-mostly copy that is replaced on every poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 0 = fresh, (0, 1) = approaching due, 1 = overdue
    #[serde(default)]
    pub staleness: f64,
    /// Mean time taken to complete, in seconds
    #[serde(default)]
    pub mean_completion_time: f64,
    /// Longest allowed gap between completions, in seconds
    #[serde(default)]
    pub max_interval: Option<u64>,
    /// Shortest sensible gap between completions, in seconds
    #[serde(default)]
    pub min_interval: Option<u64>,
    /// Cron expression for schedule-driven tasks
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub frozen: bool,
    #[serde(default)]
    pub last_completed: Option<DateTime<Utc>>,
}

impl Task {
    pub fn band(&self) -> StalenessBand {
        StalenessBand::of(self.staleness)
    }
}

/// Coarse classification of a staleness value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StalenessBand {
    /// Past due, always ranked first
    Overdue,
    /// Approaching due
    Stale,
    /// Just completed, kept out of the queue
    Fresh,
}

impl StalenessBand {
    pub fn of(staleness: f64) -> Self {
        if staleness == 0.0 {
            StalenessBand::Fresh
        } else if staleness >= 1.0 {
            StalenessBand::Overdue
        } else {
            StalenessBand::Stale
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StalenessBand::Overdue => "overdue",
            StalenessBand::Stale => "stale",
            StalenessBand::Fresh => "fresh",
        }
    }
}

/// How a new task decides when it is due
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaskSchedule {
    /// Interval bounds in seconds
    Interval { min_interval: u64, max_interval: u64 },
    /// Cron expression, checked by the server
    Cron { schedule: String },
}

/// Payload for creating a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub schedule: TaskSchedule,
}

impl TaskDraft {
    pub fn with_interval(
        name: impl Into<String>,
        description: impl Into<String>,
        min_interval: u64,
        max_interval: u64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: TaskSchedule::Interval {
                min_interval,
                max_interval,
            },
        }
    }

    pub fn with_cron(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: TaskSchedule::Cron {
                schedule: schedule.into(),
            },
        }
    }

    /// Client-side sanity checks before the draft is sent
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ChoreError::invalid_input("task name cannot be empty"));
        }
        match &self.schedule {
            TaskSchedule::Interval {
                min_interval,
                max_interval,
            } => {
                if *max_interval == 0 {
                    return Err(ChoreError::invalid_input(
                        "max interval must be greater than zero",
                    ));
                }
                if min_interval > max_interval {
                    return Err(ChoreError::invalid_input(
                        "min interval cannot exceed max interval",
                    ));
                }
            }
            TaskSchedule::Cron { schedule } => {
                if schedule.trim().is_empty() {
                    return Err(ChoreError::invalid_input("cron schedule cannot be empty"));
                }
            }
        }
        Ok(())
    }
}

/// Format a duration in seconds as "45s", "12 min" or "1 h 5 min"
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "-".to_string();
    }
    let total = seconds.round() as u64;
    if total < 60 {
        return format!("{}s", total);
    }
    let minutes = total / 60;
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{} h", hours)
    } else {
        format!("{} h {} min", hours, rest)
    }
}

/// Relative time such as "3 hours ago", measured against `now`
pub fn format_relative_time(dt: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(dt);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        if minutes == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", minutes)
        }
    } else if hours < 24 {
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    } else if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StalenessBand::of(0.0), StalenessBand::Fresh);
        assert_eq!(StalenessBand::of(0.01), StalenessBand::Stale);
        assert_eq!(StalenessBand::of(0.99), StalenessBand::Stale);
        assert_eq!(StalenessBand::of(1.0), StalenessBand::Overdue);
        assert_eq!(StalenessBand::of(1.5), StalenessBand::Overdue);
    }

    #[test]
    fn test_task_decodes_partial_payload() {
        let json = r#"{"id": 7, "name": "Dishes", "staleness": 0.4}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.description, "");
        assert_eq!(task.mean_completion_time, 0.0);
        assert!(!task.frozen);
        assert!(task.last_completed.is_none());
        assert_eq!(task.band(), StalenessBand::Stale);
    }

    #[test]
    fn test_task_decodes_full_payload() {
        let json = r#"{
            "id": 3,
            "name": "Vacuum",
            "description": "Living room",
            "staleness": 1.0,
            "mean_completion_time": 900.5,
            "max_interval": 604800,
            "min_interval": 259200,
            "frozen": true,
            "last_completed": "2026-10-01T08:30:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.max_interval, Some(604800));
        assert!(task.frozen);
        assert!(task.last_completed.is_some());
    }

    #[test]
    fn test_draft_serializes_flat() {
        let draft = TaskDraft::with_interval("Bins", "", 86400, 172800);
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["name"], "Bins");
        assert_eq!(value["min_interval"], 86400);
        assert_eq!(value["max_interval"], 172800);

        let draft = TaskDraft::with_cron("Plants", "water", "0 9 * * 1");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["schedule"], "0 9 * * 1");
        assert!(value.get("min_interval").is_none());
    }

    #[test]
    fn test_draft_validation() {
        assert!(TaskDraft::with_interval("Bins", "", 1, 2).validate().is_ok());
        assert!(TaskDraft::with_interval("  ", "", 1, 2).validate().is_err());
        assert!(TaskDraft::with_interval("Bins", "", 3, 2).validate().is_err());
        assert!(TaskDraft::with_interval("Bins", "", 0, 0).validate().is_err());
        assert!(TaskDraft::with_cron("Bins", "", " ").validate().is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "-");
        assert_eq!(format_duration(f64::NAN), "-");
        assert_eq!(format_duration(45.0), "45s");
        assert_eq!(format_duration(720.0), "12 min");
        assert_eq!(format_duration(3600.0), "1 h");
        assert_eq!(format_duration(3900.0), "1 h 5 min");
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc::now();
        assert_eq!(format_relative_time(now, now), "just now");
        assert_eq!(format_relative_time(now - Duration::minutes(1), now), "1 min ago");
        assert_eq!(format_relative_time(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(format_relative_time(now - Duration::days(1), now), "1 day ago");
        assert_eq!(format_relative_time(now - Duration::days(40), now), "40 days ago");
        // clock skew from the server must not produce nonsense
        assert_eq!(format_relative_time(now + Duration::minutes(5), now), "just now");
    }
}
