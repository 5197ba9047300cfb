//! Relative phrasing of an instant against a supplied "now"

use chrono::{DateTime, Utc};

use super::{count_unit, format_absolute, round_units};
use super::{DAY_MS, HOUR_MS, MINUTE_MS, MONTH_MS, WEEK_MS, YEAR_MS};
use crate::types::{FormatOptions, TimeInput};

/// Describe an instant relative to `now` ("2 hours ago", "in 10 minutes")
///
/// The caller supplies `now` so the output is a pure function of its inputs;
/// live display components read their clock and pass it in. Bucket selection
/// uses the raw delta, and the shown count is rounded half away from zero
/// within the chosen bucket. Beyond a week in the future or a year in the
/// past the phrasing switches to an absolute date. Input that does not
/// resolve yields an empty string.
pub fn format_relative(now: DateTime<Utc>, input: impl Into<TimeInput>) -> String {
    let Some(then) = input.into().resolve() else {
        return String::new();
    };

    let delta = now.signed_duration_since(then).num_milliseconds();
    if delta < 0 {
        future_phrase(-delta, then)
    } else {
        past_phrase(delta, then)
    }
}

fn future_phrase(ahead: i64, then: DateTime<Utc>) -> String {
    if ahead < MINUTE_MS {
        "in a moment".to_string()
    } else if ahead < HOUR_MS {
        format!("in {}", count_unit(round_units(ahead, MINUTE_MS), "minute"))
    } else if ahead < DAY_MS {
        format!("in {}", count_unit(round_units(ahead, HOUR_MS), "hour"))
    } else if ahead < WEEK_MS {
        format!("in {}", count_unit(round_units(ahead, DAY_MS), "day"))
    } else {
        // Too far out for relative phrasing; show the date itself
        format_absolute(then, &FormatOptions::short_date())
    }
}

fn past_phrase(delta: i64, then: DateTime<Utc>) -> String {
    if delta < MINUTE_MS {
        "just now".to_string()
    } else if delta < HOUR_MS {
        format!("{} ago", count_unit(round_units(delta, MINUTE_MS), "minute"))
    } else if delta < DAY_MS {
        format!("{} ago", count_unit(round_units(delta, HOUR_MS), "hour"))
    } else if delta < 2 * DAY_MS {
        "Yesterday".to_string()
    } else if delta < WEEK_MS {
        // The single-day case is always "Yesterday", so this count starts at 2
        format!("{} days ago", round_units(delta, DAY_MS))
    } else if delta < MONTH_MS {
        format!("{} ago", count_unit(round_units(delta, WEEK_MS), "week"))
    } else if delta < YEAR_MS {
        format!("{} ago", count_unit(round_units(delta, MONTH_MS), "month"))
    } else {
        format_absolute(then, &FormatOptions::date_only())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2023-11-14T22:13:20Z
    const NOW_MS: i64 = 1_700_000_000_000;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(NOW_MS).unwrap()
    }

    fn past(ms: i64) -> i64 {
        NOW_MS - ms
    }

    fn future(ms: i64) -> i64 {
        NOW_MS + ms
    }

    #[test]
    fn test_just_now_covers_first_minute() {
        assert_eq!(format_relative(now(), past(0)), "just now");
        assert_eq!(format_relative(now(), past(5_000)), "just now");
        assert_eq!(format_relative(now(), past(59_999)), "just now");
    }

    #[test]
    fn test_minutes_ago() {
        assert_eq!(format_relative(now(), past(60_000)), "1 minute ago");
        assert_eq!(format_relative(now(), past(89_999)), "1 minute ago");
        assert_eq!(format_relative(now(), past(90_000)), "2 minutes ago");
        assert_eq!(format_relative(now(), past(25 * 60_000)), "25 minutes ago");
        // Rounding happens inside the bucket, so the top edge can say 60
        assert_eq!(format_relative(now(), past(3_599_999)), "60 minutes ago");
    }

    #[test]
    fn test_hours_ago() {
        assert_eq!(format_relative(now(), past(3_600_000)), "1 hour ago");
        assert_eq!(format_relative(now(), past(7_200_000)), "2 hours ago");
        assert_eq!(format_relative(now(), past(5_400_000)), "2 hours ago"); // 90 min
    }

    #[test]
    fn test_yesterday_window() {
        // Exactly one day leaves the hour bucket
        assert_eq!(format_relative(now(), past(86_400_000)), "Yesterday");
        assert_eq!(format_relative(now(), past(90_000_000)), "Yesterday"); // ~25h
        assert_eq!(format_relative(now(), past(2 * 86_400_000 - 1)), "Yesterday");
    }

    #[test]
    fn test_days_ago_is_always_plural() {
        assert_eq!(format_relative(now(), past(2 * 86_400_000)), "2 days ago");
        assert_eq!(format_relative(now(), past(3 * 86_400_000)), "3 days ago");
        assert_eq!(
            format_relative(now(), past(7 * 86_400_000 - 1)),
            "7 days ago"
        );
    }

    #[test]
    fn test_weeks_and_months_ago() {
        // Ten days rounds down to a single week
        assert_eq!(format_relative(now(), past(10 * 86_400_000)), "1 week ago");
        assert_eq!(format_relative(now(), past(18 * 86_400_000)), "3 weeks ago");
        assert_eq!(format_relative(now(), past(30 * 86_400_000)), "1 month ago");
        assert_eq!(
            format_relative(now(), past(200 * 86_400_000)),
            "7 months ago"
        );
    }

    #[test]
    fn test_over_a_year_falls_back_to_date() {
        // 2022-11-14, rendered without the time of day
        assert_eq!(
            format_relative(now(), past(365 * 86_400_000)),
            "Nov 14, 2022"
        );
    }

    #[test]
    fn test_future_moment_and_minutes() {
        assert_eq!(format_relative(now(), future(30_000)), "in a moment");
        assert_eq!(format_relative(now(), future(59_999)), "in a moment");
        assert_eq!(format_relative(now(), future(60_000)), "in 1 minute");
        assert_eq!(format_relative(now(), future(600_000)), "in 10 minutes");
    }

    #[test]
    fn test_future_hours_and_days() {
        assert_eq!(format_relative(now(), future(3_600_000)), "in 1 hour");
        assert_eq!(format_relative(now(), future(10_800_000)), "in 3 hours");
        assert_eq!(format_relative(now(), future(86_400_000)), "in 1 day");
        assert_eq!(format_relative(now(), future(3 * 86_400_000)), "in 3 days");
    }

    #[test]
    fn test_far_future_shows_short_date() {
        // A week out: 2023-11-21, month and day only
        assert_eq!(format_relative(now(), future(7 * 86_400_000)), "Nov 21");
    }

    #[test]
    fn test_unresolvable_input_is_empty() {
        assert_eq!(format_relative(now(), "not a timestamp"), "");
    }

    #[test]
    fn test_repeat_calls_agree() {
        let first = format_relative(now(), past(7_200_000));
        let second = format_relative(now(), past(7_200_000));
        assert_eq!(first, second);
    }

    #[test]
    fn test_accepts_every_input_form() {
        assert_eq!(format_relative(now(), past(7_200_000)), "2 hours ago");
        assert_eq!(
            format_relative(now(), "2023-11-14T20:13:20Z"),
            "2 hours ago"
        );
        let instant = DateTime::from_timestamp_millis(past(7_200_000)).unwrap();
        assert_eq!(format_relative(now(), instant), "2 hours ago");
    }
}
