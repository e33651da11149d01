//! Tic Tac Toe - terminal front end
//!
//! Two players share the keyboard; the engine keeps score and raises
//! notifications that fade after a few seconds.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod audio;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tictactoe_engine::{Controller, Notifier};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::{App, Flow};
use audio::TerminalBell;
use cli::Cli;
use config::TuiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let config = TuiConfig::load_or_default(&cli.config)?.with_overrides(cli.muted);
    info!(?config, "Starting Tic Tac Toe");

    let (notice_tx, notice_rx) = mpsc::unbounded_channel();
    let (notifier, live) = Notifier::spawn(notice_rx);

    let mut controller = Controller::new(TerminalBell::new(), notice_tx);
    if *config.start_muted() {
        controller.toggle_mute();
    }
    let mut app = App::new(controller, live);

    let mut terminal = setup_terminal()?;

    let res = run_app(&mut terminal, &mut app, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Dropping the app drops the last intent sender, which stops the notifier.
    drop(app);
    if let Err(e) = notifier.await {
        error!(error = %e, "Notifier task failed");
    }

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        eprintln!("Error: {:?}", err);
    }

    info!("Goodbye");
    Ok(())
}

/// Sends tracing output to `path` so it never draws over the board.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Enters raw mode and the alternate screen, undoing both if setup fails partway.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    Terminal::new(CrosstermBackend::new(stdout)).or_else(|e| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        Err(e).context("Failed to create terminal")
    })
}

/// Draw, wait for a key, apply it; until the player quits.
#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<TerminalBell>,
    config: &TuiConfig,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(config.tick_rate())?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = input::action_for(key.code)
            && app.handle(action) == Flow::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
