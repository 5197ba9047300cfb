//! whence - live timestamp labels in the terminal
//!
//! Terminal UI showcasing relative and absolute timestamp formatting with
//! labels that refresh themselves while they stay on screen.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use whence_core::{Config, FileStore};

use crate::app::App;

#[derive(Parser)]
#[command(name = "whence")]
#[command(about = "Live timestamp labels in the terminal")]
#[command(version)]
struct Args {
    /// Path to a config file (defaults to the XDG config location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with labels pinned to the absolute form
    #[arg(short, long)]
    absolute: bool,

    /// Show the absolute form alongside each relative label
    #[arg(short, long)]
    tooltip: bool,

    /// Refresh interval for live labels in milliseconds (0 disables refresh)
    #[arg(long)]
    interval: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Pin the XDG vars before anything resolves a path
    Config::ensure_xdg_env();

    // Config file first, then flags on top
    let mut config = match &args.config {
        Some(path) => Config::load_from(path).context("could not load configuration")?,
        None => Config::load().context("could not load configuration")?,
    };
    if args.absolute {
        config.display.absolute = true;
    }
    if args.tooltip {
        config.display.tooltip = true;
    }
    if let Some(interval) = args.interval {
        config.display.update_interval_ms = interval;
    }
    config.validate().context("invalid configuration")?;

    // Log to file only; stdout belongs to the TUI
    let _log_guard =
        whence_core::logging::init(&config.logging).context("could not initialize logging")?;

    tracing::info!("whence TUI starting up");

    let store_path = Config::store_path();
    tracing::info!(path = %store_path.display(), "opening state store");
    let store = FileStore::open(store_path).context("could not open state store")?;

    let mut app = App::new(&config, store).context("could not create app")?;

    enable_raw_mode().context("could not enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("could not enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("could not create terminal")?;

    let result = run_app(&mut terminal, &mut app);

    // Put the terminal back even when the loop errored
    disable_raw_mode().context("could not disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("could not leave alternate screen")?;
    terminal.show_cursor().context("could not show cursor")?;

    tracing::info!("whence TUI shutting down");

    result
}

/// Event and redraw loop.
///
/// Redraws happen when a key was handled or when any live label has
/// refreshed since the last frame, so an idle screen with pinned labels
/// costs nothing.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_generation = app.refresh_generation();
    let mut needs_redraw = true;

    loop {
        let generation = app.refresh_generation();
        if generation != last_generation {
            last_generation = generation;
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            needs_redraw = false;
        }

        // Short poll keeps ticker-driven refreshes visible without a
        // dedicated wakeup channel
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
                needs_redraw = true;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
