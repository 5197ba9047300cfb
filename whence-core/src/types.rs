//! Core types for whence
//!
//! The central type is [`TimeInput`]: the timestamp-like value every display
//! component accepts. Inputs arrive in whatever shape the caller happens to
//! hold, and resolution to a concrete instant happens in exactly one place.
//!
//! Accepted forms:
//!
//! | Form | Example | Interpretation |
//! |------|---------|----------------|
//! | Epoch milliseconds | `1700000000000` | UTC instant |
//! | RFC 3339 text | `2023-11-14T22:13:20Z` | As written |
//! | Naive datetime text | `2023-11-14T22:13:20`, `2023-11-14 22:13:20` | Assumed UTC |
//! | Date-only text | `2023-11-14` | Midnight UTC |
//! | [`DateTime<Utc>`] / [`SystemTime`] | — | As given |
//!
//! Anything else resolves to `None`, and the formatters render it as an
//! empty string rather than an error.

use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// TimeInput
// ============================================

/// A timestamp in any of the shapes callers hold
#[derive(Debug, Clone, PartialEq)]
pub enum TimeInput {
    /// Milliseconds since the Unix epoch
    Millis(i64),
    /// ISO-8601-like text, parsed leniently
    Text(String),
    /// An already-resolved instant
    Instant(DateTime<Utc>),
}

impl TimeInput {
    /// Interpret free-form text the way a command line would
    ///
    /// A string of digits (optionally signed) is epoch milliseconds;
    /// anything else is kept as text for the lenient date parser.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if let Ok(ms) = trimmed.parse::<i64>() {
            return TimeInput::Millis(ms);
        }
        TimeInput::Text(trimmed.to_string())
    }

    /// Resolve to a concrete instant, or `None` if the input is unusable
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            TimeInput::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            TimeInput::Text(s) => parse_text(s),
            TimeInput::Instant(dt) => Some(*dt),
        }
    }
}

/// Lenient text parsing: RFC 3339 first, then common naive forms treated as UTC
fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

impl From<i64> for TimeInput {
    fn from(ms: i64) -> Self {
        TimeInput::Millis(ms)
    }
}

impl From<&str> for TimeInput {
    fn from(s: &str) -> Self {
        TimeInput::Text(s.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(s: String) -> Self {
        TimeInput::Text(s)
    }
}

impl From<DateTime<Utc>> for TimeInput {
    fn from(dt: DateTime<Utc>) -> Self {
        TimeInput::Instant(dt)
    }
}

impl From<SystemTime> for TimeInput {
    fn from(t: SystemTime) -> Self {
        TimeInput::Instant(DateTime::<Utc>::from(t))
    }
}

// ============================================
// FormatOptions
// ============================================

/// Field selection for absolute date rendering
///
/// These are the only knobs: which fields appear, not how the backing
/// formatter spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Include hour and minute (ignored when `short` is set)
    #[serde(default = "default_include_time")]
    pub include_time: bool,
    /// Month and day only, no year or time
    #[serde(default)]
    pub short: bool,
}

fn default_include_time() -> bool {
    true
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_time: true,
            short: false,
        }
    }
}

impl FormatOptions {
    /// Month and day only ("Nov 14")
    pub fn short_date() -> Self {
        Self {
            include_time: true,
            short: true,
        }
    }

    /// Month, day and year without the time ("Nov 14, 2023")
    pub fn date_only() -> Self {
        Self {
            include_time: false,
            short: false,
        }
    }
}

// ============================================
// LabelOptions
// ============================================

/// Behavior switches for a [`DateLabel`](crate::label::DateLabel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelOptions {
    /// Render the absolute form instead of the relative one
    pub show_absolute: bool,
    /// Expose the absolute form as supplementary tooltip text
    pub show_tooltip: bool,
    /// Include the time of day in absolute renderings
    pub include_time: bool,
    /// How often a live label re-reads the clock; zero disables refresh
    pub update_interval: std::time::Duration,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            show_absolute: false,
            show_tooltip: false,
            include_time: true,
            update_interval: std::time::Duration::from_secs(60),
        }
    }
}

impl LabelOptions {
    /// Options for a static, absolute-only label
    pub fn absolute() -> Self {
        Self {
            show_absolute: true,
            ..Self::default()
        }
    }

    /// Replace the refresh interval
    pub fn with_interval(mut self, interval: std::time::Duration) -> Self {
        self.update_interval = interval;
        self
    }

    /// Enable the supplementary absolute tooltip
    pub fn with_tooltip(mut self) -> Self {
        self.show_tooltip = true;
        self
    }
}
