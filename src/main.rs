mod api;
mod app;
mod board;
mod cli;
mod dialogs;
mod error;
mod event;
mod logging;
mod model;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use clap::Parser;
use ratatui::DefaultTerminal;
use tracing::{error, info};

use api::{ChoreApi, HttpApi};
use app::App;
use cli::{Cli, Commands};
use error::Result;
use storage::config::{self, Config};

/// Start the TUI
fn run_tui(config: &Config) -> Result<()> {
    let api: Arc<dyn ChoreApi> = Arc::new(HttpApi::from_config(config));
    let mut app = App::new(api, config);
    app.load_households();

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();

    result?;
    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        app.tick(Instant::now());
        app.poll_refresh();

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::handle_events(app)? {
            break;
        }
    }
    Ok(())
}

/// Restore the terminal before the panic message is printed
fn install_restore_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

fn dispatch(command: Commands) -> Result<()> {
    let config = config::load_config();
    if command.uses_terminal() {
        install_restore_hook();
    }
    let mut stdout = io::stdout();

    match command {
        Commands::Tui => run_tui(&config),
        Commands::Login { username } => cli::login::execute(username),
        Commands::Households => cli::show::households(&HttpApi::from_config(&config), &mut stdout),
        Commands::Queue { household } => {
            cli::show::queue(&HttpApi::from_config(&config), household, Utc::now(), &mut stdout)
        }
        Commands::Leaderboard { household, n } => {
            cli::show::leaderboard(&HttpApi::from_config(&config), household, n, &mut stdout)
        }
        Commands::Complete(args) => {
            cli::task::complete(&HttpApi::from_config(&config), args, &mut stdout)
        }
        Commands::Task { action } => {
            cli::task::execute(&HttpApi::from_config(&config), action, &mut stdout)
        }
    }
}

fn main() -> ExitCode {
    // Logging is best-effort; the board works without a log file
    let log_path = logging::init().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    info!(version = env!("CARGO_PKG_VERSION"), ?log_path, "starting");

    match dispatch(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
