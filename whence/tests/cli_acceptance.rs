//! End-to-end tests for the whence-fmt binary.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

// All timestamps below are anchored at 2023-11-14T22:13:20Z.
const NOW: &str = "1700000000000";

/// Throwaway home for one test, so config, state, and logs never touch
/// the developer's real XDG directories.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = TempDir::new().expect("failed to create sandbox");
        for sub in ["home", "data", "config", "state"] {
            fs::create_dir_all(root.path().join(sub)).expect("failed to lay out sandbox");
        }
        Self { root }
    }

    fn fmt(&self, args: &[&str]) -> Output {
        let base = self.root.path();
        Command::new(assert_cmd::cargo::cargo_bin!("whence-fmt"))
            .env("HOME", base.join("home"))
            .env("XDG_DATA_HOME", base.join("data"))
            .env("XDG_CONFIG_HOME", base.join("config"))
            .env("XDG_STATE_HOME", base.join("state"))
            .args(args)
            .output()
            .expect("failed to run whence-fmt")
    }

    /// Run whence-fmt expecting success; returns captured stdout.
    fn fmt_ok(&self, args: &[&str]) -> String {
        let output = self.fmt(args);
        assert!(
            output.status.success(),
            "whence-fmt {} exited with {}\nstderr:\n{}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

#[test]
fn fmt_formats_recent_past() {
    let sandbox = Sandbox::new();

    let two_hours_ago = sandbox.fmt_ok(&["--now", NOW, "--at", "1699992800000"]);
    assert_eq!(two_hours_ago, "2 hours ago\n");

    let seconds_ago = sandbox.fmt_ok(&["--now", NOW, "--at", "1699999995000"]);
    assert_eq!(seconds_ago, "just now\n");
}

#[test]
fn fmt_formats_yesterday_and_weeks() {
    let sandbox = Sandbox::new();

    let yesterday = sandbox.fmt_ok(&["--now", NOW, "--at", "1699910000000"]);
    assert_eq!(yesterday, "Yesterday\n");

    let ten_days = sandbox.fmt_ok(&["--now", NOW, "--at", "1699136000000"]);
    assert_eq!(ten_days, "1 week ago\n");
}

#[test]
fn fmt_formats_future() {
    let sandbox = Sandbox::new();

    let soon = sandbox.fmt_ok(&["--now", NOW, "--at", "1700000030000"]);
    assert_eq!(soon, "in a moment\n");

    let ten_minutes = sandbox.fmt_ok(&["--now", NOW, "--at", "1700000600000"]);
    assert_eq!(ten_minutes, "in 10 minutes\n");
}

#[test]
fn fmt_absolute_forms() {
    let sandbox = Sandbox::new();

    let full = sandbox.fmt_ok(&["--now", NOW, "--at", NOW, "--absolute"]);
    assert_eq!(full, "Nov 14, 2023, 10:13 PM\n");

    let date_only = sandbox.fmt_ok(&["--now", NOW, "--at", NOW, "--absolute", "--no-time"]);
    assert_eq!(date_only, "Nov 14, 2023\n");

    let short = sandbox.fmt_ok(&["--now", NOW, "--at", NOW, "--short"]);
    assert_eq!(short, "Nov 14\n");
}

#[test]
fn fmt_accepts_iso_text() {
    let sandbox = Sandbox::new();

    let stdout = sandbox.fmt_ok(&["--now", NOW, "--at", "2023-11-14T20:13:20Z"]);
    assert_eq!(stdout, "2 hours ago\n");
}

#[test]
fn fmt_tooltip_appends_absolute() {
    let sandbox = Sandbox::new();

    let stdout = sandbox.fmt_ok(&["--now", NOW, "--at", "1699992800000", "--tooltip"]);
    assert_eq!(stdout, "2 hours ago\tNov 14, 2023, 8:13 PM\n");
}

#[test]
fn fmt_unparseable_input_prints_nothing() {
    let sandbox = Sandbox::new();

    let output = sandbox.fmt(&["--now", NOW, "--at", "not-a-timestamp"]);
    assert!(output.status.success());
    assert!(
        output.stdout.is_empty(),
        "expected no output for unparseable input, got {:?}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn fmt_rejects_bad_now_anchor() {
    let sandbox = Sandbox::new();

    let output = sandbox.fmt(&["--now", "not-a-timestamp", "--at", NOW]);
    assert!(
        !output.status.success(),
        "a bad --now anchor should be a hard error"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--now"),
        "stderr should name the bad flag, got:\n{stderr}"
    );
}
