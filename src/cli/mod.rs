//! Command line interface
//!
//! Without a subcommand the TUI starts. The rest are one-shot commands that
//! talk to the service once, print plain text and exit.

pub mod login;
pub mod show;
pub mod task;

use clap::{Args, Parser, Subcommand};

use crate::api::ChoreApi;
use crate::error::{ChoreError, Result};
use crate::model::HouseholdId;

#[derive(Parser)]
#[command(name = "choreboard")]
#[command(version)]
#[command(about = "Household chore board for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive board (default)
    Tui,
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: Option<String>,
    },
    /// List the households you belong to
    Households,
    /// Print the ranked chore queue
    Queue {
        /// Household id (optional when you are in exactly one)
        #[arg(long)]
        household: Option<HouseholdId>,
    },
    /// Print the brownie point leaderboard
    Leaderboard {
        #[arg(long)]
        household: Option<HouseholdId>,
        /// Number of rows
        #[arg(short, default_value_t = 5)]
        n: usize,
    },
    /// Log a completed chore
    Complete(CompleteArgs),
    /// Create, delete or freeze tasks
    Task {
        #[command(subcommand)]
        action: TaskCommand,
    },
}

impl Commands {
    /// Whether the command takes over the terminal (raw mode, alternate screen)
    pub fn uses_terminal(&self) -> bool {
        matches!(self, Commands::Tui)
    }
}

#[derive(Args, Debug)]
pub struct CompleteArgs {
    #[arg(long)]
    pub task: u64,
    /// User ids sharing the credit (repeatable)
    #[arg(long = "user", required = true)]
    pub users: Vec<u64>,
    #[arg(long)]
    pub minutes: u64,
    #[arg(long, default_value_t = 0)]
    pub grossness: u8,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Create a task
    Add {
        #[arg(long)]
        household: Option<HouseholdId>,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, requires = "max_days", conflicts_with = "cron")]
        min_days: Option<u64>,
        #[arg(long, requires = "min_days", conflicts_with = "cron")]
        max_days: Option<u64>,
        /// Cron expression instead of an interval
        #[arg(long)]
        cron: Option<String>,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: u64,
    },
    /// Toggle a task's frozen flag
    Freeze {
        #[arg(long)]
        id: u64,
    },
}

/// Use `explicit` if given, else the only household the user belongs to
pub fn resolve_household(
    api: &dyn ChoreApi,
    explicit: Option<HouseholdId>,
) -> Result<HouseholdId> {
    if let Some(id) = explicit {
        return Ok(id);
    }
    let households = api.fetch_households()?;
    match households.as_slice() {
        [only] => Ok(only.id),
        [] => Err(ChoreError::NotSelected),
        _ => Err(ChoreError::invalid_input(
            "several households found, pass --household",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::FakeApi;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_complete() {
        let cli = Cli::try_parse_from([
            "choreboard", "complete", "--task", "3", "--user", "1", "--user", "2", "--minutes", "15",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Complete(args)) => {
                assert_eq!(args.task, 3);
                assert_eq!(args.users, vec![1, 2]);
                assert_eq!(args.minutes, 15);
                assert_eq!(args.grossness, 0);
            }
            _ => panic!("expected complete"),
        }
    }

    #[test]
    fn test_task_add_interval_and_cron_conflict() {
        let result = Cli::try_parse_from([
            "choreboard", "task", "add", "--name", "x", "--min-days", "1", "--max-days", "2",
            "--cron", "0 9 * * 1",
        ]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["choreboard", "task", "add", "--name", "x", "--min-days", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["choreboard"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_only_tui_uses_terminal() {
        assert!(Commands::Tui.uses_terminal());
        for args in [
            &["choreboard", "households"][..],
            &["choreboard", "queue", "--household", "1"],
            &["choreboard", "login", "--username", "sam"],
            &["choreboard", "task", "freeze", "--id", "2"],
        ] {
            let command = Cli::try_parse_from(args).unwrap().command.unwrap();
            assert!(!command.uses_terminal());
        }
    }

    #[test]
    fn test_resolve_household() {
        let api = FakeApi::new().with_household(4, "Flat");
        assert_eq!(resolve_household(&api, None).unwrap(), 4);
        assert_eq!(resolve_household(&api, Some(9)).unwrap(), 9);

        let api = FakeApi::new();
        assert!(matches!(resolve_household(&api, None), Err(ChoreError::NotSelected)));

        let api = FakeApi::new().with_household(1, "A").with_household(2, "B");
        assert!(resolve_household(&api, None).is_err());
    }
}
