//! Read-only commands: households, queue, leaderboard

use std::io::Write;

use chrono::{DateTime, Utc};

use super::resolve_household;
use crate::api::ChoreApi;
use crate::board::{ApplyOutcome, TaskBoard};
use crate::error::{ChoreError, Result};
use crate::model::{format_duration, format_relative_time, HouseholdId};
use crate::ui::components::leaderboard::format_points;

pub fn households(api: &dyn ChoreApi, out: &mut dyn Write) -> Result<()> {
    let households = api.fetch_households()?;
    if households.is_empty() {
        writeln!(out, "You are not in any household.")?;
        return Ok(());
    }
    for h in households {
        writeln!(out, "{:>6}  {}", h.id, h.name)?;
    }
    Ok(())
}

pub fn queue(
    api: &dyn ChoreApi,
    household: Option<HouseholdId>,
    now: DateTime<Utc>,
    out: &mut dyn Write,
) -> Result<()> {
    let board = load_board(api, household, TaskBoard::refresh_tasks)?;
    if board.tasks().is_empty() {
        writeln!(out, "No tasks in this household yet.")?;
        return Ok(());
    }

    let ranked = board.ranked();
    if ranked.queue.is_empty() {
        writeln!(out, "Nothing to do, every task is fresh.")?;
    }
    for (i, task) in ranked.queue.iter().enumerate() {
        let last = task
            .last_completed
            .map(|dt| format_relative_time(dt, now))
            .unwrap_or_else(|| "never".to_string());
        writeln!(
            out,
            "{:>3}. [{:<7}] {:>3.0}%  {:<30} takes {:<8} last done {}  (#{})",
            i + 1,
            task.band().label(),
            task.staleness.clamp(0.0, 1.0) * 100.0,
            task.name,
            format_duration(task.mean_completion_time),
            last,
            task.id,
        )?;
    }
    if !ranked.fresh.is_empty() {
        let names: Vec<String> = ranked
            .fresh
            .iter()
            .map(|t| if t.frozen { format!("{} (frozen)", t.name) } else { t.name.clone() })
            .collect();
        writeln!(out, "\nFresh: {}", names.join(", "))?;
    }
    Ok(())
}

pub fn leaderboard(
    api: &dyn ChoreApi,
    household: Option<HouseholdId>,
    n: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let board = load_board(api, household, TaskBoard::refresh_users)?;
    let household = board.household().ok_or(ChoreError::NotSelected)?;

    for (i, user) in board.top_scorers(n).iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {:<20} {:>7}",
            i + 1,
            user.username,
            format_points(user.score(household))
        )?;
    }
    Ok(())
}

/// One synchronous refresh on a fresh board. A failed fetch is an error here,
/// unlike in the poll loop where the cache just stays as it was.
fn load_board(
    api: &dyn ChoreApi,
    household: Option<HouseholdId>,
    refresh: fn(&mut TaskBoard, &dyn ChoreApi) -> ApplyOutcome,
) -> Result<TaskBoard> {
    let household = resolve_household(api, household)?;
    let mut board = TaskBoard::new(Some(household));
    match refresh(&mut board, api) {
        ApplyOutcome::Failed => Err(ChoreError::transport(format!(
            "could not reach the chore service for household {}",
            household
        ))),
        _ => Ok(board),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{task, user, FakeApi};

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_households() {
        let api = FakeApi::new().with_household(1, "Flat").with_household(2, "Cabin");
        let text = output(|out| households(&api, out));
        assert!(text.contains("Flat"));
        assert!(text.contains("Cabin"));
    }

    #[test]
    fn test_queue_order_and_fresh_line() {
        let api = FakeApi::new().with_household(1, "Flat");
        let mut frozen = task(4, 0.6, 1.0);
        frozen.frozen = true;
        api.set_tasks(
            1,
            vec![task(1, 1.0, 50.0), task(2, 0.5, 10.0), task(3, 1.0, 10.0), task(5, 0.0, 1.0), frozen],
        );
        let text = output(|out| queue(&api, None, Utc::now(), out));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("task-3"));
        assert!(lines[1].contains("task-1"));
        assert!(lines[2].contains("task-2"));
        assert!(lines[0].contains("[overdue"));
        assert!(text.contains("Fresh: task-4 (frozen), task-5"));
    }

    #[test]
    fn test_queue_surfaces_fetch_errors() {
        let api = FakeApi::new().with_household(1, "Flat");
        api.fail_reads(true);
        let mut buf = Vec::new();
        assert!(queue(&api, Some(1), Utc::now(), &mut buf).is_err());
    }

    #[test]
    fn test_queue_with_no_tasks() {
        let api = FakeApi::new().with_household(1, "Flat");
        let text = output(|out| queue(&api, Some(1), Utc::now(), out));
        assert_eq!(text, "No tasks in this household yet.\n");
    }

    #[test]
    fn test_leaderboard_surfaces_fetch_errors() {
        let api = FakeApi::new().with_household(1, "Flat");
        api.fail_reads(true);
        let err = leaderboard(&api, Some(1), 5, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ChoreError::Transport(_)));
    }

    #[test]
    fn test_leaderboard() {
        let api = FakeApi::new().with_household(1, "Flat");
        api.set_users(
            1,
            vec![user(1, 1, 8.0, 3.0), user(2, 1, 9.0, 0.0), user(3, 1, 1.0, 0.0)],
        );
        let text = output(|out| leaderboard(&api, Some(1), 2, out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("user-2") && lines[0].contains('9'));
        assert!(lines[1].contains("user-1") && lines[1].contains('5'));
    }
}
