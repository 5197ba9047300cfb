//! Timestamp formatting shared across UIs
//!
//! Two pure entry points: [`format_relative`] for "2 hours ago" /
//! "in 10 minutes" phrasing, and [`format_absolute`] for calendar dates.
//! Both accept anything convertible to [`TimeInput`](crate::types::TimeInput)
//! and return an empty string for input that does not resolve.

mod absolute;
mod relative;

pub use absolute::format_absolute;
pub use relative::format_relative;

// ============================================
// Unit thresholds (milliseconds)
// ============================================

/// One minute
pub const MINUTE_MS: i64 = 60_000;
/// One hour
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
/// One day
pub const DAY_MS: i64 = 24 * HOUR_MS;
/// One week
pub const WEEK_MS: i64 = 7 * DAY_MS;
/// Thirty days; close enough for relative phrasing
pub const MONTH_MS: i64 = 30 * DAY_MS;
/// 365 days; leap years are ignored at this granularity
pub const YEAR_MS: i64 = 365 * DAY_MS;

/// Round a millisecond magnitude to whole units, half away from zero
pub(crate) fn round_units(magnitude: i64, unit: i64) -> i64 {
    (magnitude + unit / 2) / unit
}

/// "1 minute" / "3 minutes"; the count is always shown
pub(crate) fn count_unit(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
