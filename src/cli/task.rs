//! Mutating commands

use std::io::Write;

use tracing::info;

use super::{resolve_household, CompleteArgs, TaskCommand};
use crate::api::ChoreApi;
use crate::error::{ChoreError, Result};
use crate::model::{TaskDraft, WorkLogDraft};
use crate::ui::components::leaderboard::format_points;

const DAY_SECS: u64 = 24 * 60 * 60;

pub fn complete(api: &dyn ChoreApi, args: CompleteArgs, out: &mut dyn Write) -> Result<()> {
    let completion_time = args
        .minutes
        .checked_mul(60)
        .ok_or_else(|| ChoreError::invalid_input("minutes out of range"))?;
    let draft = WorkLogDraft {
        task: args.task,
        users: args.users,
        completion_time,
        grossness: args.grossness,
    };
    draft.validate()?;

    let points = api.create_work_log(&draft)?;
    info!(task = draft.task, users = ?draft.users, ?points, "work log created");
    match points {
        Some(p) => writeln!(out, "Logged task #{}: +{} brownie points", draft.task, format_points(p))?,
        None => writeln!(out, "Logged task #{}", draft.task)?,
    }
    Ok(())
}

fn days_to_secs(days: u64) -> Result<u64> {
    days.checked_mul(DAY_SECS)
        .ok_or_else(|| ChoreError::invalid_input(format!("{} days is too long", days)))
}

pub fn execute(api: &dyn ChoreApi, command: TaskCommand, out: &mut dyn Write) -> Result<()> {
    match command {
        TaskCommand::Add {
            household,
            name,
            description,
            min_days,
            max_days,
            cron,
        } => {
            let draft = match (min_days, max_days, cron) {
                (_, _, Some(schedule)) => TaskDraft::with_cron(name, description, schedule),
                (Some(min), Some(max), None) => {
                    TaskDraft::with_interval(name, description, days_to_secs(min)?, days_to_secs(max)?)
                }
                _ => {
                    return Err(ChoreError::invalid_input(
                        "give either --min-days and --max-days, or --cron",
                    ))
                }
            };
            draft.validate()?;
            let household = resolve_household(api, household)?;
            let task = api.create_task(household, &draft)?;
            info!(task = task.id, household, "task created");
            writeln!(out, "Created task #{}: {}", task.id, task.name)?;
        }
        TaskCommand::Delete { id } => {
            api.delete_task(id)?;
            info!(task = id, "task deleted");
            writeln!(out, "Deleted task #{}", id)?;
        }
        TaskCommand::Freeze { id } => {
            api.toggle_freeze(id)?;
            writeln!(out, "Toggled freeze on task #{}", id)?;
        }
    }
    Ok(())
}
