//! Calendar-date rendering with field selection

use crate::types::{FormatOptions, TimeInput};

/// Render an instant as a calendar date ("Nov 14, 2023, 10:13 PM")
///
/// [`FormatOptions`] selects which fields appear; the spelling itself is
/// delegated to chrono's formatter. `short` wins over `include_time`, so a
/// short date never carries a year or time. The instant renders in UTC.
/// Input that does not resolve yields an empty string.
pub fn format_absolute(input: impl Into<TimeInput>, options: &FormatOptions) -> String {
    let Some(then) = input.into().resolve() else {
        return String::new();
    };

    let fmt = if options.short {
        "%b %-d"
    } else if options.include_time {
        "%b %-d, %Y, %-I:%M %p"
    } else {
        "%b %-d, %Y"
    };
    then.format(fmt).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2023-11-14T22:13:20Z
    const NOW_MS: i64 = 1_700_000_000_000;

    #[test]
    fn test_default_includes_time() {
        let text = format_absolute(NOW_MS, &FormatOptions::default());
        assert_eq!(text, "Nov 14, 2023, 10:13 PM");
    }

    #[test]
    fn test_short_is_month_and_day_only() {
        let text = format_absolute(NOW_MS, &FormatOptions::short_date());
        assert_eq!(text, "Nov 14");
        assert!(!text.contains("2023"));
        assert!(!text.contains(':'));
    }

    #[test]
    fn test_date_only_drops_the_time() {
        let text = format_absolute(NOW_MS, &FormatOptions::date_only());
        assert_eq!(text, "Nov 14, 2023");
    }

    #[test]
    fn test_minutes_are_zero_padded() {
        // 2024-01-01T09:05:00Z
        let text = format_absolute("2024-01-01T09:05:00Z", &FormatOptions::default());
        assert_eq!(text, "Jan 1, 2024, 9:05 AM");
    }

    #[test]
    fn test_short_ignores_include_time() {
        let opts = FormatOptions {
            include_time: true,
            short: true,
        };
        assert_eq!(format_absolute(NOW_MS, &opts), "Nov 14");
    }

    #[test]
    fn test_unresolvable_input_is_empty() {
        assert_eq!(format_absolute("garbage", &FormatOptions::default()), "");
    }
}
