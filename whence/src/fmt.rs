//! whence-fmt - CLI tool to format a timestamp the way the TUI labels do
//!
//! Reads a timestamp (epoch milliseconds or ISO-8601 text), formats it
//! relative to now, and prints the result to stdout. Useful for shell
//! prompts and scripts that want the same phrasing as the TUI.
//!
//! File locations follow the XDG basedir layout: config is read from
//! `$XDG_CONFIG_HOME/whence/config.toml` and logs land in
//! `$XDG_STATE_HOME/whence/whence.log`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use whence_core::{format_absolute, format_relative, Config, FormatOptions, TimeInput};

#[derive(Parser)]
#[command(name = "whence-fmt")]
#[command(about = "Format a timestamp the way whence labels do")]
#[command(version)]
struct Args {
    /// Timestamp to format (epoch milliseconds or ISO-8601 text)
    #[arg(long)]
    at: String,

    /// Anchor "now" at this timestamp instead of the wall clock
    #[arg(long)]
    now: Option<String>,

    /// Print the absolute form instead of the relative one
    #[arg(short, long)]
    absolute: bool,

    /// Use the short absolute form (month and day only)
    #[arg(long)]
    short: bool,

    /// Leave the time of day out of absolute forms
    #[arg(long)]
    no_time: bool,

    /// Append the full absolute form after a tab
    #[arg(short, long)]
    tooltip: bool,

    /// Watch mode - reprint whenever the phrasing changes
    #[arg(short, long)]
    watch: bool,

    /// How often watch mode re-checks, in milliseconds
    #[arg(long, default_value = "1000")]
    poll: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Pin the XDG vars before anything resolves a path
    Config::ensure_xdg_env();

    let config = Config::load().context("could not load configuration")?;

    let _log_guard =
        whence_core::logging::init(&config.logging).context("could not initialize logging")?;

    tracing::info!(at = %args.at, "whence-fmt starting");

    // A bad --now anchor is an operator error, unlike a bad --at value,
    // which formats to the empty string like any other unparseable input.
    let anchor = match &args.now {
        Some(text) => match TimeInput::parse(text).resolve() {
            Some(instant) => Some(instant),
            None => bail!("could not parse --now value {:?} as a timestamp", text),
        },
        None => None,
    };

    let input = TimeInput::parse(&args.at);

    if args.watch {
        run_watch_mode(&input, anchor, &args)
    } else {
        let now = anchor.unwrap_or_else(Utc::now);
        let line = render_line(&input, now, &args);
        if !line.is_empty() {
            println!("{line}");
        }
        Ok(())
    }
}

/// Compose one output line under the requested options.
fn render_line(input: &TimeInput, now: DateTime<Utc>, args: &Args) -> String {
    let options = FormatOptions {
        include_time: !args.no_time,
        short: args.short,
    };

    let mut line = if args.absolute || args.short {
        format_absolute(input.clone(), &options)
    } else {
        format_relative(now, input.clone())
    };

    if args.tooltip && !line.is_empty() {
        let full = format_absolute(
            input.clone(),
            &FormatOptions {
                include_time: !args.no_time,
                short: false,
            },
        );
        line.push('\t');
        line.push_str(&full);
    }

    line
}

/// Reprint the formatted timestamp whenever its phrasing changes.
fn run_watch_mode(input: &TimeInput, anchor: Option<DateTime<Utc>>, args: &Args) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let stop = running.clone();

    // Ctrl+C flips the flag; the loop notices on its next pass
    ctrlc::set_handler(move || {
        eprintln!("\nStopping...");
        stop.store(false, Ordering::SeqCst);
    })
    .context("could not set Ctrl+C handler")?;

    let period = Duration::from_millis(args.poll);
    let mut last = String::new();

    while running.load(Ordering::SeqCst) {
        let now = anchor.unwrap_or_else(Utc::now);
        let line = render_line(input, now, args);

        // Only print when the phrasing changed
        if line != last {
            println!("{line}");
            last = line;
        }

        thread::sleep(period);
    }

    tracing::info!("whence-fmt watch mode stopped");

    Ok(())
}
