//! Logging infrastructure for whence
//!
//! Logs are written to `~/.local/state/whence/whence.log` following XDG
//! standards, rotated daily, with the oldest rotations pruned down to
//! `logging.max_files`.

use crate::config::{Config, LoggingConfig};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "whence.log";

/// Hold this for the lifetime of the program; dropping it flushes the
/// non-blocking writer.
pub struct LoggingGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Wire tracing to a daily-rotated file under the XDG state directory.
///
/// `RUST_LOG` overrides the configured level when set. Writes go through
/// a non-blocking worker so rendering never waits on the log file.
pub fn init(config: &LoggingConfig) -> crate::error::Result<LoggingGuard> {
    let log_dir = Config::state_dir();
    std::fs::create_dir_all(&log_dir)?;

    prune_old_logs(&log_dir, config.max_files);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(
        file = %Config::log_path().display(),
        level = %config.level,
        "logging ready"
    );

    Ok(LoggingGuard { _guard: guard })
}

/// Delete rotated log files beyond the newest `keep`
///
/// Rotated files are named `whence.log.YYYY-MM-DD`, so a lexicographic sort
/// is also a chronological one. Failures here are ignored; pruning must
/// never stop the program from starting.
fn prune_old_logs(log_dir: &Path, keep: usize) {
    let Ok(entries) = std::fs::read_dir(log_dir) else {
        return;
    };

    let mut rotated: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX) && n != LOG_FILE_PREFIX)
        })
        .collect();

    if rotated.len() <= keep {
        return;
    }

    rotated.sort();
    let excess = rotated.len() - keep;
    for path in rotated.into_iter().take(excess) {
        let _ = std::fs::remove_file(path);
    }
}

/// Test-only subscriber that routes events to the captured test output.
/// Safe to call from every test; only the first call wins.
pub fn init_test() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}
